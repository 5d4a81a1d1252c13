use anyhow::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::language_detector::{LanguageDetector, WhatlangDetector};
use crate::output_formatter::OutputFormat;
use crate::pdf_extractor::{PdfExtractor, TextExtractor};
use crate::prompt::Prompter;
use crate::translation::{PipelineOptions, TranslationPipeline, TranslationService};

// @module: Application controller for PDF translation

/// Everything needed to translate one document
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Input PDF
    pub pdf_path: PathBuf,
    /// Source language as typed; `None` means auto-detect
    pub source_language: Option<String>,
    /// Target language as typed
    pub target_language: String,
    /// Clean extracted text before translation
    pub clean: bool,
    /// Output format selector (txt, html, md)
    pub output_format: String,
    /// Overwrite an existing output file without asking
    pub overwrite: bool,
}

impl RunOptions {
    /// Options for a PDF using the configured defaults
    pub fn from_config(config: &Config, pdf_path: impl Into<PathBuf>) -> Self {
        Self {
            pdf_path: pdf_path.into(),
            source_language: config.source_language.clone(),
            target_language: config.target_language.clone(),
            clean: config.clean,
            output_format: config.output_format.clone(),
            overwrite: false,
        }
    }
}

/// Options as given on the command line; `None` / `false` means "not given"
#[derive(Debug, Clone, Default)]
pub struct RequestedOptions {
    pub pdf_path: Option<PathBuf>,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub clean: bool,
    pub output_format: Option<String>,
    pub overwrite: bool,
}

impl RequestedOptions {
    /// Fill in whatever the command line left out.
    ///
    /// Each missing value is asked for; an empty answer falls back to the
    /// configured default. Only the PDF path has no default.
    pub fn resolve(self, config: &Config, prompter: &dyn Prompter) -> Result<RunOptions, AppError> {
        let pdf_path = match self.pdf_path {
            Some(path) => path,
            None => {
                let answer = prompter.ask("Please enter the PDF file path: ").map_err(AppError::Prompt)?;
                let path = FileManager::normalize_path_input(&answer);
                if path.as_os_str().is_empty() {
                    return Err(AppError::Config("A PDF file path is required".to_string()));
                }
                path
            }
        };

        let source_language = match self.source_language {
            Some(source) => Some(source),
            None => {
                let answer = prompter
                    .ask("Optional: Enter source language (or leave blank to auto-detect): ")
                    .map_err(AppError::Prompt)?;
                if answer.is_empty() { config.source_language.clone() } else { Some(answer) }
            }
        };

        let target_language = match self.target_language {
            Some(target) => target,
            None => {
                let answer = prompter
                    .ask(&format!("Optional: Enter target language (default: {}): ", config.target_language))
                    .map_err(AppError::Prompt)?;
                if answer.is_empty() { config.target_language.clone() } else { answer }
            }
        };

        let clean = if self.clean {
            true
        } else {
            let default_hint = if config.clean { "Y" } else { "N" };
            let answer = prompter
                .ask(&format!(
                    "Optional: Clean text before translation? (leave blank for default: {}) (y/N): ",
                    default_hint
                ))
                .map_err(AppError::Prompt)?
                .to_lowercase();
            if answer.is_empty() { config.clean } else { answer == "y" || answer == "yes" }
        };

        let output_format = match self.output_format {
            Some(format) => format.to_lowercase(),
            None => {
                let answer = prompter
                    .ask(&format!(
                        "Optional: Enter output format (txt, html, md). Default: {}: ",
                        config.output_format
                    ))
                    .map_err(AppError::Prompt)?
                    .to_lowercase();
                if answer.is_empty() { config.output_format.clone() } else { answer }
            }
        };

        Ok(RunOptions {
            pdf_path,
            source_language,
            target_language,
            clean,
            output_format,
            overwrite: self.overwrite,
        })
    }
}

/// Main application controller for PDF translation
pub struct Controller {
    // @field: PDF text source
    extractor: Box<dyn TextExtractor>,
    // @field: Source language detector
    detector: Box<dyn LanguageDetector>,
    // @field: Translation backend
    translation_service: TranslationService,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: &Config) -> Result<Self> {
        let translation_service = TranslationService::new(&config.translation)?;

        Ok(Self::with_components(
            Box::new(PdfExtractor::new()),
            Box::new(WhatlangDetector::new()),
            translation_service,
        ))
    }

    /// Create a controller from explicit collaborators
    pub fn with_components(
        extractor: Box<dyn TextExtractor>,
        detector: Box<dyn LanguageDetector>,
        translation_service: TranslationService,
    ) -> Self {
        Self {
            extractor,
            detector,
            translation_service,
        }
    }

    /// Translate one PDF and write the result, returning the output path.
    ///
    /// No file is written unless translation succeeded.
    pub async fn run(&self, options: &RunOptions, prompter: &dyn Prompter) -> Result<PathBuf, AppError> {
        let start_time = Instant::now();
        let pdf_path = &options.pdf_path;

        if !FileManager::file_exists(pdf_path) {
            return Err(AppError::FileNotFound(pdf_path.clone()));
        }

        let output_format: OutputFormat = options.output_format.parse()?;

        info!("Extracting text from {:?}", pdf_path);
        let raw_text = self.extractor.extract_text(pdf_path)?;
        debug!("Extracted {} characters", raw_text.chars().count());

        let pipeline = TranslationPipeline::new(self.detector.as_ref(), &self.translation_service);
        let pipeline_options = PipelineOptions {
            clean: options.clean,
            source_language: options.source_language.clone(),
            target_language: options.target_language.clone(),
        };
        let outcome = pipeline.run(&raw_text, &pipeline_options).await?;

        let output_path = FileManager::generate_output_path(
            pdf_path,
            &outcome.source_language,
            &outcome.target_language,
            output_format.extension(),
        );
        let output_path = FileManager::resolve_output_conflict(&output_path, options.overwrite, |path| {
            prompter.confirm(&format!(
                "Output file already exists:\n{}\n\nOverwrite it? [y/N]: ",
                path.display()
            ))
        })
        .map_err(AppError::Prompt)?;

        let title = Self::document_title(pdf_path, &outcome.source_language, &outcome.target_language);
        let document = output_format.render(&outcome.translated_text, Some(&title));

        FileManager::write_to_file(&output_path, &document).map_err(|source| AppError::OutputWrite {
            path: output_path.clone(),
            source,
        })?;

        info!(
            "Translation from {} to {} completed in {}. Output saved to: {:?}",
            outcome.source_language,
            outcome.target_language,
            Self::format_duration(start_time.elapsed()),
            output_path
        );

        Ok(output_path)
    }

    /// Title placed in HTML and Markdown output
    pub fn document_title(pdf_path: &Path, source_language: &str, target_language: &str) -> String {
        let file_name = pdf_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        format!(
            "Translation of {} from {} to {}",
            file_name, source_language, target_language
        )
    }

    /// Format a duration as `1m 05s` or `4.2s`
    fn format_duration(duration: std::time::Duration) -> String {
        let secs = duration.as_secs();
        if secs >= 60 {
            format!("{}m {:02}s", secs / 60, secs % 60)
        } else {
            format!("{:.1}s", duration.as_secs_f64())
        }
    }
}
