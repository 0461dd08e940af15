//! Internal helpers for name validation and comparison.
//!
//! These utilities are **not** part of the public API. They centralize
//! normalization logic so the engine enforces consistent invariants.

use unicode_normalization::UnicodeNormalization;

/// Canonical form of a user-supplied name used for uniqueness checks.
///
/// Comparisons are NFC-normalized and case-insensitive so "Visas" and
/// "visas" count as the same category.
pub(crate) fn normalize_name(value: &str) -> String {
    value.trim().nfc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_is_case_insensitive() {
        assert_eq!(normalize_name("Visas"), normalize_name("  visas "));
    }

    #[test]
    fn normalization_folds_composed_forms() {
        // U+00E9 vs e + U+0301
        assert_eq!(normalize_name("caf\u{e9}"), normalize_name("cafe\u{301}"));
    }
}
