/*!
 * Source language detection.
 *
 * Guesses the language of a text with `whatlang` and reports it as an
 * ISO 639-1 code when one exists (falling back to the ISO 639-3 code), so the
 * result can go through [`crate::language_utils::normalize_language_code`]
 * like any user-supplied code.
 */

use isolang::Language;
use log::debug;
use whatlang::Lang;

/// Best-effort guess of the language a text is written in
pub trait LanguageDetector {
    /// Returns `None` when the language cannot be determined
    fn detect(&self, text: &str) -> Option<String>;
}

/// Detector backed by the `whatlang` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        let info = whatlang::detect(text)?;
        debug!(
            "whatlang guess: {} (confidence {:.2}, reliable: {})",
            info.lang().eng_name(),
            info.confidence(),
            info.is_reliable()
        );
        Some(lang_to_code(info.lang()))
    }
}

/// Convert a whatlang language to the shortest ISO code available
pub fn lang_to_code(lang: Lang) -> String {
    // Mandarin has no ISO 639-1 code of its own
    if lang == Lang::Cmn {
        return "zh".to_string();
    }

    let part3 = lang.code();
    Language::from_639_3(part3)
        .and_then(|language| language.to_639_1())
        .unwrap_or(part3)
        .to_string()
}
