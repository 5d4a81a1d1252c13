/*!
 * # pdf-translator
 *
 * A Rust library and command line tool that translates the text of PDF files.
 *
 * ## Features
 *
 * - Extract the text of every page of a PDF
 * - Optionally repair extraction artifacts (hyphenated line breaks,
 *   letter-spaced words)
 * - Resolve free-form language names ("Chinese", "Farsi", "zh-tw") to codes
 * - Detect the source language when none is given
 * - Translate using one of several providers:
 *   - Google Translate web endpoint (default)
 *   - Ollama (local LLM)
 *   - Anthropic API
 * - Write the result as plain text, HTML or Markdown next to the input
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `app_controller`: Top-level orchestration of one document
 * - `pdf_extractor`: PDF text extraction
 * - `text_cleaner`: Cleanup of extracted text
 * - `language_utils`: Language code resolution and display names
 * - `language_detector`: Source language detection
 * - `translation`: Translation service, chunking and pipeline
 * - `providers`: Client implementations for the translation backends
 * - `output_formatter`: txt / html / md templates
 * - `file_utils`: Output paths and file writing
 * - `prompt`: Interactive console questions
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_detector;
pub mod language_utils;
pub mod output_formatter;
pub mod pdf_extractor;
pub mod prompt;
pub mod providers;
pub mod text_cleaner;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RequestedOptions, RunOptions};
pub use errors::{AppError, ProviderError, TranslationError};
pub use language_utils::{get_language_name, normalize_language_code};
pub use output_formatter::OutputFormat;
pub use providers::TranslationRequest;
pub use text_cleaner::clean_extracted_text;
pub use translation::{TranslationPipeline, TranslationService};
