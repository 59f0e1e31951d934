//! Unit tests for locale resolution and number formatting.

use chartfield::locale::{Locale, NumberFormat};

#[test]
fn test_french_tags_resolve_to_french() {
    for tag in ["fr", "fr-CA", "fr_BE", " FR-ch "] {
        assert_eq!(Locale::from_tag(tag), Locale::French, "{tag:?}");
    }
}

#[test]
fn test_everything_else_falls_back_to_canadian_english() {
    for tag in ["", "en", "en-US", "es-MX", "frisian"] {
        assert_eq!(Locale::from_tag(tag), Locale::CanadianEnglish, "{tag:?}");
    }
    assert_eq!(Locale::default(), Locale::CanadianEnglish);
}

#[test]
fn test_tables() {
    assert_eq!(Locale::French.tag(), "fr_FR");
    assert_eq!(Locale::French.table().decimal_separator, ',');
    assert_eq!(Locale::CanadianEnglish.tag(), "en_CA");
    assert_eq!(Locale::CanadianEnglish.truncated_label(), "truncated");
}

#[test]
fn test_negative_values() {
    let en = Locale::CanadianEnglish;
    assert_eq!(en.format(-1500.0, NumberFormat::Si), "-1.5k");
    assert_eq!(en.format(-0.5, NumberFormat::Plain), "-0.5");
}

#[test]
fn test_format_patterns() {
    assert_eq!(NumberFormat::Si.pattern(), "#.#s");
    assert_eq!(NumberFormat::default(), NumberFormat::Plain);
}
