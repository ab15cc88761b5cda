//! Text normalization and table-based canonicalization.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// A fixed mapping from normalized variants to canonical ids.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalTable {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl CanonicalTable {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Looks up an already-normalized key.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(variant, _)| *variant == key)
            .map(|(_, canonical)| *canonical)
    }

    /// Distinct canonical ids in table order.
    pub fn canonical_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = Vec::new();
        for (_, canonical) in self.entries {
            if !ids.contains(canonical) {
                ids.push(*canonical);
            }
        }
        ids
    }
}

/// Laboratory equipment variants.
pub static EQUIPMENT: CanonicalTable = CanonicalTable::new(
    "equipment",
    &[
        ("phmetro", "phmetro"),
        ("ph metro", "phmetro"),
        ("ph-metro", "phmetro"),
        ("espectrofotometro", "espectrofotometro"),
        ("centrifuga", "centrifuga"),
        ("microscopio", "microscopio"),
        ("balanza", "balanza"),
        ("autoclave", "autoclave"),
    ],
);

/// Work shifts; the pre-dawn shift counts as night.
pub static SHIFT: CanonicalTable = CanonicalTable::new(
    "shift",
    &[
        ("manana", "manana"),
        ("tarde", "tarde"),
        ("noche", "noche"),
        ("madrugada", "noche"),
    ],
);

/// Operator comment families.
pub static COMMENT: CanonicalTable = CanonicalTable::new(
    "comment",
    &[
        ("ok", "ok"),
        ("bien", "ok"),
        ("normal", "ok"),
        ("error", "error"),
        ("fallo", "error"),
        ("problema", "error"),
        ("mantenimiento", "mantenimiento"),
        ("calibracion", "calibracion"),
    ],
);

/// Lower-cases, strips combining marks after NFD decomposition, and trims.
///
/// Empty input is returned unchanged.
///
/// # Examples
///
/// ```
/// use lab_transform::normalization::normalize_text;
///
/// assert_eq!(normalize_text("  Centrífuga "), "centrifuga");
/// assert_eq!(normalize_text("MAÑANA"), "manana");
/// assert_eq!(normalize_text(""), "");
/// ```
pub fn normalize_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect();
    folded.trim().to_string()
}

/// Normalizes an optional value; `None` stays `None`.
pub fn normalize_optional(text: Option<&str>) -> Option<String> {
    text.map(normalize_text)
}

/// Normalizes `text` and maps it through `table`.
///
/// Unknown values come back normalized but otherwise unchanged.
///
/// # Examples
///
/// ```
/// use lab_transform::normalization::{EQUIPMENT, canonicalize};
///
/// assert_eq!(canonicalize("pH Metro", &EQUIPMENT), "phmetro");
/// assert_eq!(canonicalize("Cromatógrafo", &EQUIPMENT), "cromatografo");
/// ```
pub fn canonicalize(text: &str, table: &CanonicalTable) -> String {
    let key = normalize_text(text);
    match table.lookup(&key) {
        Some(canonical) => canonical.to_string(),
        None => key,
    }
}

/// Whether `text` normalizes to a key of `table`.
pub fn is_known(text: &str, table: &CanonicalTable) -> bool {
    table.lookup(&normalize_text(text)).is_some()
}
