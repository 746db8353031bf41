//! Tests for the language detection policy.

use isittrue_lang::{DEFAULT_LANGUAGE, LanguageDetector};

#[test]
fn absent_text_yields_default_language() {
    let detector = LanguageDetector::new();
    let detected = detector.detect(None);
    assert_eq!(detected.code, DEFAULT_LANGUAGE);
    assert_eq!(detected.display_name, "Français");
    assert!(detected.instruction.contains("Français") || detected.instruction.contains("français"));
}

#[test]
fn short_text_skips_detection_deterministically() {
    let detector = LanguageDetector::new();
    for sample in ["", " ", "ab", "  a  ", "ok", "!?"] {
        let detected = detector.detect(Some(sample));
        assert_eq!(detected.code, DEFAULT_LANGUAGE, "sample: {sample:?}");
    }
}

#[test]
fn english_text_is_detected_as_english() {
    let detector = LanguageDetector::new();
    let detected = detector.detect(Some(
        "Is the Earth flat? Some conspiracy theorists claim this is true.",
    ));
    assert_eq!(detected.code, "en");
    assert_eq!(detected.display_name, "Anglais");
    assert_eq!(
        detected.instruction,
        "Always respond in English. You are addressing English speakers!"
    );
}

#[test]
fn french_text_is_detected_as_french() {
    let detector = LanguageDetector::new();
    let detected = detector.detect(Some(
        "La Terre est plate selon certains conspirationnistes, est-ce vrai ?",
    ));
    assert_eq!(detected.code, "fr");
}

#[test]
fn detection_never_panics_on_odd_input() {
    let detector = LanguageDetector::new();
    for sample in ["12345 67890 12345", "🤔🤔🤔🤔", "https://a.b/c?d=e"] {
        let detected = detector.detect(Some(sample));
        assert!(!detected.code.is_empty(), "sample: {sample:?}");
    }
}
