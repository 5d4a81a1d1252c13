/*!
 * Tests for source language detection
 */

use pdf_translator::language_detector::{LanguageDetector, WhatlangDetector};
use pdf_translator::language_utils::normalize_language_code;

#[test]
fn test_whatlang_detector_withEnglishProse_shouldReturnEn() {
    let detector = WhatlangDetector::new();
    let text = "The committee reviewed the annual report and approved the budget for the next year.";

    assert_eq!(detector.detect(text).as_deref(), Some("en"));
}

#[test]
fn test_whatlang_detector_withFrenchProse_shouldReturnFr() {
    let detector = WhatlangDetector::new();
    let text = "Le comité a examiné le rapport annuel et a approuvé le budget pour l'année prochaine.";

    assert_eq!(detector.detect(text).as_deref(), Some("fr"));
}

#[test]
fn test_whatlang_detector_withChinese_shouldResolveToSimplified() {
    let detector = WhatlangDetector::new();
    let detected = detector.detect("我们今天在图书馆里学习中文，然后一起去吃晚饭。").unwrap();

    assert_eq!(normalize_language_code(&detected), "zh-CN");
}

#[test]
fn test_whatlang_detector_withNoLetters_shouldReturnNone() {
    assert_eq!(WhatlangDetector::new().detect("12345 67890 !!!"), None);
}
