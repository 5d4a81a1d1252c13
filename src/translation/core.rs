/*!
 * Core translation service implementation.
 *
 * This module contains the TranslationService struct, which owns the active
 * provider and feeds it a document chunk by chunk.
 */

use anyhow::{Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::time::Instant;

use crate::app_config::{TranslationConfig, TranslationProvider as ConfigTranslationProvider};
use crate::errors::TranslationError;
use crate::providers::anthropic::Anthropic;
use crate::providers::google::GoogleTranslate;
use crate::providers::ollama::Ollama;
use crate::providers::{Provider, TranslationRequest};
use super::batch::split_into_chunks;

/// Main translation service for document translation
pub struct TranslationService {
    /// Provider implementation
    provider: Box<dyn Provider>,

    /// Largest chunk sent in one request (0 = unlimited)
    max_chars_per_request: usize,
}

impl TranslationService {
    /// Create a new translation service with the given configuration
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        let timeout_secs = config.get_timeout_secs();
        let common = &config.common;
        debug!("Building {} provider (timeout {}s)", config.provider, timeout_secs);

        let provider: Box<dyn Provider> = match config.provider {
            ConfigTranslationProvider::Google => {
                Box::new(GoogleTranslate::new(config.get_endpoint(), timeout_secs))
            }
            ConfigTranslationProvider::Ollama => Box::new(Ollama::new(
                config.get_endpoint(),
                config.get_model(),
                &common.system_prompt,
                common.temperature,
                timeout_secs,
            )),
            ConfigTranslationProvider::Anthropic => {
                let api_key = config.get_api_key();
                if api_key.is_empty() {
                    return Err(anyhow!("Translation API key is required for Anthropic provider"));
                }
                Box::new(Anthropic::new(
                    api_key,
                    config.get_endpoint(),
                    config.get_model(),
                    &common.system_prompt,
                    common.temperature,
                    timeout_secs,
                ))
            }
        };

        Ok(Self::with_provider(provider, config.get_max_chars_per_request()))
    }

    /// Create a service around an existing provider
    pub fn with_provider(provider: Box<dyn Provider>, max_chars_per_request: usize) -> Self {
        Self {
            provider,
            max_chars_per_request,
        }
    }

    /// Name of the active provider
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Translate a whole document.
    ///
    /// Chunks are sent one after another; the first failing chunk aborts the
    /// translation and its error is returned. Nothing is retried.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        let start_time = Instant::now();
        let chunks = split_into_chunks(&request.text, self.max_chars_per_request);
        let pending = chunks.iter().filter(|c| !c.is_blank()).count();

        debug!(
            "Translating {} chars in {} request(s) via {}",
            request.text.chars().count(),
            pending,
            self.provider.name()
        );

        let progress_bar = if pending > 1 {
            let bar = ProgressBar::new(pending as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            Some(bar)
        } else {
            None
        };

        let mut translated = String::with_capacity(request.text.len());
        for chunk in &chunks {
            if chunk.is_blank() {
                translated.push_str(&chunk.wrap(""));
                continue;
            }

            let result = self.provider.translate(&request.with_text(&chunk.content)).await;
            let text = match result {
                Ok(text) => text,
                Err(e) => {
                    if let Some(bar) = &progress_bar {
                        bar.abandon();
                    }
                    return Err(TranslationError::Provider(e));
                }
            };

            translated.push_str(&chunk.wrap(&text));
            if let Some(bar) = &progress_bar {
                bar.inc(1);
            }
        }

        if let Some(bar) = progress_bar {
            bar.finish_and_clear();
        }

        info!(
            "Translated {} chunk(s) in {:.1}s",
            pending,
            start_time.elapsed().as_secs_f64()
        );
        Ok(translated)
    }
}
