/*!
 * Tests for text extraction from generated PDF files
 */

use anyhow::Result;
use std::fs;
use pdf_translator::app_controller::{Controller, RunOptions};
use pdf_translator::errors::AppError;
use pdf_translator::pdf_extractor::{PdfExtractor, TextExtractor, join_pages};
use pdf_translator::prompt::NonInteractivePrompter;
use pdf_translator::providers::mock::MockProvider;
use pdf_translator::translation::TranslationService;
use crate::common::{self, FixedDetector};

#[test]
fn test_join_pages_shouldKeepOrderAndBreakLines() {
    let pages = vec!["one".to_string(), "two".to_string(), "three".to_string()];

    assert_eq!(join_pages(&pages), "one\ntwo\nthree");
    assert_eq!(join_pages(&[]), "");
}

#[test]
fn test_pdf_extractor_withTwoPages_shouldConcatenateInPageOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let pdf = common::create_text_pdf(temp_dir.path(), "report.pdf", &["Introduction", "Conclusion"])?;

    let text = PdfExtractor::new().extract_text(&pdf)?;

    let first = text.find("Introduction").expect("first page text missing");
    let second = text.find("Conclusion").expect("second page text missing");
    assert!(first < second);
    // Both lines sit at the same height; only the page break separates them
    assert!(text[first + "Introduction".len()..second].contains('\n'));
    Ok(())
}

#[test]
fn test_pdf_extractor_withNonPdfFile_shouldReturnExtractionError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let fake = common::create_test_file(temp_dir.path(), "notes.pdf", "just some plain text")?;

    let result = PdfExtractor::new().extract_text(&fake);

    assert!(matches!(result, Err(AppError::Extraction(_))));
    Ok(())
}

#[tokio::test]
async fn test_run_withRealTwoPagePdf_shouldTranslateBothPagesInOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let pdf = common::create_text_pdf(temp_dir.path(), "report.pdf", &["Introduction", "Conclusion"])?;
    let provider = MockProvider::echo();
    let controller = Controller::with_components(
        Box::new(PdfExtractor::new()),
        Box::new(FixedDetector::returning("en")),
        TranslationService::with_provider(Box::new(provider.clone()), 0),
    );
    let options = RunOptions {
        pdf_path: pdf,
        source_language: Some("en".to_string()),
        target_language: "fr".to_string(),
        clean: false,
        output_format: "txt".to_string(),
        overwrite: false,
    };

    let output = controller.run(&options, &NonInteractivePrompter).await?;

    let written = fs::read_to_string(&output)?;
    assert_eq!(output, temp_dir.path().join("report_en_fr.txt"));
    let first = written.find("Introduction").expect("first page missing from output");
    let second = written.find("Conclusion").expect("second page missing from output");
    assert!(first < second);
    assert_eq!(provider.request_count(), 1);
    Ok(())
}
