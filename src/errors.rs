/*!
 * Error types for the pdf-translator application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when talking to a translation backend
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting or quota
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The backend answered but returned no text
    #[error("Provider returned an empty translation")]
    EmptyResponse,

    /// Generation stopped at the output token limit
    #[error("Translation was cut off after {0} output tokens")]
    TruncatedResponse(u32),
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// The input PDF does not exist
    #[error("Input file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The PDF library failed to read the document
    #[error("Failed to extract text from PDF: {0}")]
    Extraction(String),

    /// The document contains no extractable text
    #[error("No text found in the PDF")]
    EmptyExtraction,

    /// Auto-detection of the source language failed
    #[error("Failed to detect source language")]
    LanguageDetection,

    /// Output extension is not one of txt, html, md
    #[error("Unsupported output format '{0}'. Supported: txt, html, md")]
    UnsupportedFormat(String),

    /// Error from translation
    #[error("Translation failed: {0}")]
    Translation(#[from] TranslationError),

    /// Writing the output file failed
    #[error("Failed to save the output file {}: {source}", path.display())]
    OutputWrite {
        /// Path that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading an answer from the console failed
    #[error("Failed to read user input: {0}")]
    Prompt(#[source] std::io::Error),

    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        Self::Translation(TranslationError::Provider(error))
    }
}
