use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::{Provider, TranslationRequest, error_for_status, error_for_transport};

/// Client for the public Google Translate web endpoint
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Base URL, e.g. `https://translate.googleapis.com`
    endpoint: String,
}

impl GoogleTranslate {
    /// Create a new client
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    /// Build the request URL for a language pair
    pub fn request_url(&self, source_language: &str, target_language: &str) -> Result<Url, ProviderError> {
        let base = format!("{}/translate_a/single", self.endpoint.trim_end_matches('/'));
        Url::parse_with_params(
            &base,
            &[
                ("client", "gtx"),
                ("sl", source_language),
                ("tl", target_language),
                ("dt", "t"),
            ],
        )
        .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint {}: {}", base, e)))
    }

    /// Concatenate the translated segments of a `translate_a/single` response.
    ///
    /// The body is a nested array whose first element lists the segments as
    /// `[translated, original, ...]`.
    pub fn parse_response(body: &Value) -> Result<String, ProviderError> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::ParseError("missing translation segments".to_string()))?;

        let text: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect();

        if text.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl Provider for GoogleTranslate {
    fn name(&self) -> &str {
        "Google Translate"
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        let url = self.request_url(&request.source_language, &request.target_language)?;
        debug!("POST {} ({} chars)", url, request.text.chars().count());

        let response = self.client.post(url)
            .form(&[("q", request.text.as_str())])
            .send()
            .await
            .map_err(error_for_transport)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Google Translate error ({}): {}", status, error_text);
            return Err(error_for_status(status, error_text));
        }

        let body = response.json::<Value>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::parse_response(&body)
    }
}
