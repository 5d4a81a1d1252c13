/*!
 * Provider implementations for different translation services.
 *
 * This module contains client implementations for the supported backends:
 * - Google: public Google Translate web endpoint (default, no key needed)
 * - Ollama: Local LLM server
 * - Anthropic: Anthropic API integration
 * - Mock: in-process provider for tests
 */

use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;

use crate::errors::ProviderError;
use crate::language_utils;

pub mod anthropic;
pub mod google;
pub mod mock;
pub mod ollama;

/// Text plus the resolved language pair it should be translated between.
///
/// Both codes are canonical: the source has either been resolved from user
/// input or detected, never left as a free-form alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Canonical source language code
    pub source_language: String,
    /// Canonical target language code
    pub target_language: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }

    /// Same language pair, different text
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_language: self.source_language.clone(),
            target_language: self.target_language.clone(),
        }
    }
}

/// Common trait for all translation providers
///
/// Implementations make exactly one attempt per call; retrying is left to
/// the caller.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Short name used in log messages
    fn name(&self) -> &str;

    /// Translate the request text
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError>;
}

/// Fill the `{source_language}` and `{target_language}` placeholders of an
/// LLM system prompt with display names
pub fn render_system_prompt(template: &str, request: &TranslationRequest) -> String {
    template
        .replace("{source_language}", &language_utils::get_language_name(&request.source_language))
        .replace("{target_language}", &language_utils::get_language_name(&request.target_language))
}

/// Map a non-success HTTP status and its body to a provider error
pub(crate) fn error_for_status(status: StatusCode, body: String) -> ProviderError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthenticationError(body),
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded(body),
        _ => ProviderError::ApiError {
            status_code: status.as_u16(),
            message: body,
        },
    }
}

/// Map a transport failure to a provider error
pub(crate) fn error_for_transport(error: reqwest::Error) -> ProviderError {
    if error.is_connect() || error.is_timeout() {
        ProviderError::ConnectionError(error.to_string())
    } else {
        ProviderError::RequestFailed(error.to_string())
    }
}
