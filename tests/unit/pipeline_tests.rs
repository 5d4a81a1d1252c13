/*!
 * Tests for the text-to-translation pipeline.
 *
 * Covers the ordering guarantees:
 * - empty input is rejected before anything else runs
 * - cleaning happens before detection and translation
 * - languages are resolved to canonical codes
 * - provider failures propagate without retry
 */

use pdf_translator::errors::{AppError, TranslationError};
use pdf_translator::providers::TranslationRequest;
use pdf_translator::providers::mock::MockProvider;
use pdf_translator::translation::{PipelineOptions, TranslationPipeline, TranslationService};
use crate::common::FixedDetector;

fn options(clean: bool, source: Option<&str>, target: &str) -> PipelineOptions {
    PipelineOptions {
        clean,
        source_language: source.map(str::to_string),
        target_language: target.to_string(),
    }
}

#[tokio::test]
async fn test_pipeline_run_withCleanAndAliases_shouldSendCanonicalRequest() {
    let provider = MockProvider::echo();
    let service = TranslationService::with_provider(Box::new(provider.clone()), 0);
    let detector = FixedDetector::returning("de");
    let pipeline = TranslationPipeline::new(&detector, &service);

    let outcome = pipeline
        .run("Trans-\nlate this.", &options(true, Some("English"), "fr"))
        .await
        .unwrap();

    assert_eq!(provider.requests(), vec![TranslationRequest::new("Translate this.", "en", "fr")]);
    assert_eq!(outcome.prepared_text, "Translate this.");
    assert_eq!(outcome.source_language, "en");
    assert_eq!(outcome.target_language, "fr");
    assert_eq!(detector.call_count(), 0);
}

#[tokio::test]
async fn test_pipeline_run_withWhitespaceOnlyText_shouldFailBeforeTranslating() {
    let provider = MockProvider::working();
    let service = TranslationService::with_provider(Box::new(provider.clone()), 0);
    let detector = FixedDetector::returning("en");
    let pipeline = TranslationPipeline::new(&detector, &service);

    let result = pipeline.run("  \n\t ", &options(true, None, "fr")).await;

    assert!(matches!(result, Err(AppError::EmptyExtraction)));
    assert_eq!(provider.request_count(), 0);
    assert_eq!(detector.call_count(), 0);
}

#[test]
fn test_pipeline_prepare_withoutClean_shouldKeepRawText() {
    let service = TranslationService::with_provider(Box::new(MockProvider::working()), 0);
    let detector = FixedDetector::returning("en");
    let pipeline = TranslationPipeline::new(&detector, &service);

    let request = pipeline
        .prepare("Trans-\nlate this.", &options(false, Some("en"), "French"))
        .unwrap();

    assert_eq!(request, TranslationRequest::new("Trans-\nlate this.", "en", "fr"));
}

#[test]
fn test_pipeline_prepare_withoutSource_shouldResolveDetectedCode() {
    let service = TranslationService::with_provider(Box::new(MockProvider::working()), 0);
    let detector = FixedDetector::returning("zh");
    let pipeline = TranslationPipeline::new(&detector, &service);

    let request = pipeline.prepare("你好，世界", &options(false, None, "en")).unwrap();

    assert_eq!(request.source_language, "zh-CN");
    assert_eq!(detector.call_count(), 1);
}

#[test]
fn test_pipeline_prepare_withBlankSource_shouldDetect() {
    let service = TranslationService::with_provider(Box::new(MockProvider::working()), 0);
    let detector = FixedDetector::returning("fr");
    let pipeline = TranslationPipeline::new(&detector, &service);

    let request = pipeline.prepare("Bonjour", &options(false, Some("   "), "en")).unwrap();

    assert_eq!(request.source_language, "fr");
}

#[tokio::test]
async fn test_pipeline_run_withUndetectableLanguage_shouldFailWithoutTranslating() {
    let provider = MockProvider::working();
    let service = TranslationService::with_provider(Box::new(provider.clone()), 0);
    let detector = FixedDetector::unknown();
    let pipeline = TranslationPipeline::new(&detector, &service);

    let result = pipeline.run("12345 67890", &options(false, None, "en")).await;

    assert!(matches!(result, Err(AppError::LanguageDetection)));
    assert_eq!(provider.request_count(), 0);
}

#[test]
fn test_pipeline_prepare_withEmptyDetectedCode_shouldFail() {
    let service = TranslationService::with_provider(Box::new(MockProvider::working()), 0);
    let detector = FixedDetector::returning(" ");
    let pipeline = TranslationPipeline::new(&detector, &service);

    let result = pipeline.prepare("text", &options(false, None, "en"));

    assert!(matches!(result, Err(AppError::LanguageDetection)));
}

#[tokio::test]
async fn test_pipeline_run_withFailingProvider_shouldPropagateTranslationError() {
    let provider = MockProvider::failing();
    let service = TranslationService::with_provider(Box::new(provider.clone()), 0);
    let detector = FixedDetector::returning("en");
    let pipeline = TranslationPipeline::new(&detector, &service);

    let result = pipeline.run("Hello", &options(false, Some("en"), "fr")).await;

    assert!(matches!(result, Err(AppError::Translation(TranslationError::Provider(_)))));
    assert_eq!(provider.request_count(), 1);
}

#[test]
fn test_pipeline_prepare_withUnknownTarget_shouldPassThrough() {
    let service = TranslationService::with_provider(Box::new(MockProvider::working()), 0);
    let detector = FixedDetector::returning("en");
    let pipeline = TranslationPipeline::new(&detector, &service);

    let request = pipeline.prepare("Hello", &options(false, Some("EN"), "XX-YY")).unwrap();

    assert_eq!(request.target_language, "xx-yy");
}
