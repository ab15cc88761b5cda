//! Normalization functions for raw production cells.
//!
//! - **text**: case/diacritic folding and canonical lookup tables
//! - **datetime**: ordered multi-format date parsing
//! - **numeric**: numeric coercion

pub mod datetime;
pub mod numeric;
pub mod text;

pub use datetime::{DateFormat, DateParse, parse_date, parse_optional_date};
pub use numeric::{NumericParse, coerce_numeric, is_valid_percentage, parse_f64};
pub use text::{
    COMMENT, CanonicalTable, EQUIPMENT, SHIFT, canonicalize, is_known, normalize_optional,
    normalize_text,
};
