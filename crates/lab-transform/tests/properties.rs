//! Property tests for text normalization.

use lab_transform::normalization::{EQUIPMENT, SHIFT, canonicalize, normalize_text};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_is_idempotent(text in "[a-zA-ZáéíóúñÁÉÍÓÚÑü \\-]{0,20}") {
        let once = normalize_text(&text);
        prop_assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn normalize_ignores_case(text in "[a-zA-Z \\-]{0,20}") {
        prop_assert_eq!(
            normalize_text(&text.to_uppercase()),
            normalize_text(&text.to_lowercase())
        );
    }

    #[test]
    fn normalized_text_has_no_accents(text in "[a-zA-ZáéíóúñÁÉÍÓÚÑü ]{0,20}") {
        let normalized = normalize_text(&text);
        prop_assert!(normalized.chars().all(|ch| ch.is_ascii()));
    }

    #[test]
    fn canonical_equipment_is_known_or_normalized(text in "[a-zA-Zíó \\-]{0,16}") {
        let canonical = canonicalize(&text, &EQUIPMENT);
        let known = EQUIPMENT.canonical_ids().contains(&canonical.as_str());
        prop_assert!(known || canonical == normalize_text(&text));
    }

    #[test]
    fn canonicalize_is_stable(text in "[a-zA-Zñ ]{0,12}") {
        let once = canonicalize(&text, &SHIFT);
        prop_assert_eq!(canonicalize(&once, &SHIFT), once);
    }
}
