/*!
 * Text-to-translation pipeline.
 *
 * Takes the raw text of a document through the fixed sequence of steps:
 * reject empty input, optionally clean, resolve the target language, resolve
 * or detect the source language, then translate in a single attempt.
 */

use log::{info, warn};

use crate::errors::AppError;
use crate::language_detector::LanguageDetector;
use crate::language_utils::{describe_language, normalize_language_code};
use crate::providers::TranslationRequest;
use crate::text_cleaner::clean_extracted_text;
use super::core::TranslationService;

/// Per-document pipeline settings
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Apply the text cleaner before translating
    pub clean: bool,
    /// Source language as typed by the user; `None` triggers detection
    pub source_language: Option<String>,
    /// Target language as typed by the user
    pub target_language: String,
}

/// Result of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    /// Canonical source language actually used
    pub source_language: String,
    /// Canonical target language actually used
    pub target_language: String,
    /// Text that was sent for translation (cleaned if requested)
    pub prepared_text: String,
    /// Translation returned by the provider
    pub translated_text: String,
}

/// Coordinates cleaning, language resolution and translation
pub struct TranslationPipeline<'a> {
    detector: &'a dyn LanguageDetector,
    service: &'a TranslationService,
}

impl<'a> TranslationPipeline<'a> {
    pub fn new(detector: &'a dyn LanguageDetector, service: &'a TranslationService) -> Self {
        Self { detector, service }
    }

    /// Produce the request that will be handed to the translator
    pub fn prepare(&self, raw_text: &str, options: &PipelineOptions) -> Result<TranslationRequest, AppError> {
        if raw_text.trim().is_empty() {
            return Err(AppError::EmptyExtraction);
        }

        let text = if options.clean {
            info!("Cleaning extracted text");
            clean_extracted_text(raw_text)
        } else {
            raw_text.to_string()
        };

        let target_language = normalize_language_code(&options.target_language);

        let source_language = match options.source_language.as_deref().map(str::trim) {
            Some(source) if !source.is_empty() => normalize_language_code(source),
            _ => {
                warn!("No source language provided. Detecting...");
                let detected = self.detector.detect(&text)
                    .filter(|code| !code.trim().is_empty())
                    .ok_or(AppError::LanguageDetection)?;
                let resolved = normalize_language_code(&detected);
                info!("Detected source language: {}", describe_language(&resolved));
                resolved
            }
        };

        Ok(TranslationRequest::new(text, source_language, target_language))
    }

    /// Run the full pipeline on extracted text
    pub async fn run(&self, raw_text: &str, options: &PipelineOptions) -> Result<PipelineOutcome, AppError> {
        let request = self.prepare(raw_text, options)?;

        info!(
            "Translating from {} to {} using {}",
            describe_language(&request.source_language),
            describe_language(&request.target_language),
            self.service.provider_name()
        );

        let translated_text = self.service.translate(&request).await?;

        Ok(PipelineOutcome {
            source_language: request.source_language,
            target_language: request.target_language,
            prepared_text: request.text,
            translated_text,
        })
    }
}
