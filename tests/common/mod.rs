/*!
 * Common test utilities for the pdf-translator test suite
 */

use anyhow::Result;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use pdf_translator::app_controller::Controller;
use pdf_translator::errors::AppError;
use pdf_translator::language_detector::LanguageDetector;
use pdf_translator::pdf_extractor::TextExtractor;
use pdf_translator::prompt::Prompter;
use pdf_translator::providers::mock::MockProvider;
use pdf_translator::translation::TranslationService;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a placeholder PDF; its bytes are never parsed by the fake extractor
pub fn create_test_pdf(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, "%PDF-1.4\n%%EOF\n")
}

/// Writes a real PDF with one line of Helvetica text per page.
///
/// Every line is drawn at the same position, so page boundaries are the only
/// thing separating the texts. Object offsets in the xref table are computed
/// while writing.
pub fn create_text_pdf(dir: &Path, filename: &str, pages: &[&str]) -> Result<PathBuf> {
    let page_count = pages.len();
    let mut objects: Vec<String> = Vec::new();

    let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", 4 + 2 * i)).collect();
    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    objects.push(format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), page_count));
    objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());

    for (i, text) in pages.iter().enumerate() {
        let escaped = text.replace('\\', "\\\\").replace('(', "\\(").replace(')', "\\)");
        let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", escaped);
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + 2 * i
        ));
        objects.push(format!("<< /Length {} >>\nstream\n{}\nendstream", content.len(), content));
    }

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, object) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, object));
    }

    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in &offsets {
        pdf.push_str(&format!("{:010} 00000 n \n", offset));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));

    create_test_file(dir, filename, &pdf)
}

/// Extractor returning fixed text regardless of the file
#[derive(Debug, Clone)]
pub struct FixedTextExtractor {
    pub text: String,
}

impl FixedTextExtractor {
    pub fn new(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

impl TextExtractor for FixedTextExtractor {
    fn extract_text(&self, _path: &Path) -> Result<String, AppError> {
        Ok(self.text.clone())
    }
}

/// Extractor that always fails
#[derive(Debug, Default)]
pub struct FailingExtractor;

impl TextExtractor for FailingExtractor {
    fn extract_text(&self, _path: &Path) -> Result<String, AppError> {
        Err(AppError::Extraction("corrupt xref table".to_string()))
    }
}

/// Detector returning a fixed answer and counting its calls
#[derive(Debug, Default)]
pub struct FixedDetector {
    pub answer: Option<String>,
    pub calls: RefCell<usize>,
}

impl FixedDetector {
    pub fn returning(code: &str) -> Self {
        Self {
            answer: Some(code.to_string()),
            calls: RefCell::new(0),
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        *self.calls.borrow()
    }
}

impl LanguageDetector for FixedDetector {
    fn detect(&self, _text: &str) -> Option<String> {
        *self.calls.borrow_mut() += 1;
        self.answer.clone()
    }
}

/// Prompter replaying scripted answers and recording the questions
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    questions: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            questions: RefCell::new(Vec::new()),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, question: &str) -> io::Result<String> {
        self.questions.borrow_mut().push(question.to_string());
        Ok(self.answers.borrow_mut().pop_front().unwrap_or_default())
    }
}

/// Controller wired to a fake extractor, a fixed detector and a mock provider
pub fn create_test_controller(text: &str, detected: &str, provider: MockProvider) -> Controller {
    Controller::with_components(
        Box::new(FixedTextExtractor::new(text)),
        Box::new(FixedDetector::returning(detected)),
        TranslationService::with_provider(Box::new(provider), 0),
    )
}
