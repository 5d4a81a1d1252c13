/*!
 * Tests for option resolution and controller helpers
 */

use std::path::{Path, PathBuf};
use pdf_translator::app_config::Config;
use pdf_translator::app_controller::{Controller, RequestedOptions, RunOptions};
use pdf_translator::errors::AppError;
use pdf_translator::prompt::{NonInteractivePrompter, Prompter};
use crate::common::ScriptedPrompter;

fn fully_specified() -> RequestedOptions {
    RequestedOptions {
        pdf_path: Some(PathBuf::from("paper.pdf")),
        source_language: Some("German".to_string()),
        target_language: Some("fr".to_string()),
        clean: true,
        output_format: Some("HTML".to_string()),
        overwrite: true,
    }
}

#[test]
fn test_resolve_withAllOptionsGiven_shouldNotPrompt() {
    let prompter = ScriptedPrompter::new(&[]);

    let options = fully_specified().resolve(&Config::default(), &prompter).unwrap();

    assert!(prompter.questions().is_empty());
    assert_eq!(options.pdf_path, PathBuf::from("paper.pdf"));
    assert_eq!(options.source_language.as_deref(), Some("German"));
    assert_eq!(options.target_language, "fr");
    assert!(options.clean);
    assert_eq!(options.output_format, "html");
    assert!(options.overwrite);
}

#[test]
fn test_resolve_withEmptyAnswers_shouldUseConfiguredDefaults() {
    let prompter = ScriptedPrompter::new(&[]);
    let requested = RequestedOptions {
        pdf_path: Some(PathBuf::from("paper.pdf")),
        ..RequestedOptions::default()
    };

    let options = requested.resolve(&Config::default(), &prompter).unwrap();

    assert_eq!(options.source_language, None);
    assert_eq!(options.target_language, "en");
    assert!(!options.clean);
    assert_eq!(options.output_format, "txt");
    assert!(!options.overwrite);
    assert_eq!(prompter.questions().len(), 4);
    assert!(prompter.questions()[1].contains("default: en"));
}

#[test]
fn test_resolve_withScriptedAnswers_shouldUseThem() {
    let prompter = ScriptedPrompter::new(&["  \"/tmp/my paper.pdf\" ", "Farsi", "", "YES", "MD"]);

    let options = RequestedOptions::default().resolve(&Config::default(), &prompter).unwrap();

    assert_eq!(options.pdf_path, PathBuf::from("/tmp/my paper.pdf"));
    assert_eq!(options.source_language.as_deref(), Some("Farsi"));
    assert_eq!(options.target_language, "en");
    assert!(options.clean);
    assert_eq!(options.output_format, "md");
}

#[test]
fn test_resolve_withoutPdfPath_shouldFail() {
    let result = RequestedOptions::default().resolve(&Config::default(), &NonInteractivePrompter);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_resolve_withConfigDefaults_shouldPreferThemOverBuiltIns() {
    let mut config = Config::default();
    config.target_language = "ja".to_string();
    config.output_format = "md".to_string();
    config.clean = true;
    let requested = RequestedOptions {
        pdf_path: Some(PathBuf::from("paper.pdf")),
        ..RequestedOptions::default()
    };

    let options = requested.resolve(&config, &NonInteractivePrompter).unwrap();

    assert_eq!(options.target_language, "ja");
    assert_eq!(options.output_format, "md");
    assert!(options.clean);
}

#[test]
fn test_run_options_from_config_shouldCopyDefaults() {
    let options = RunOptions::from_config(&Config::default(), "doc.pdf");

    assert_eq!(options.pdf_path, PathBuf::from("doc.pdf"));
    assert_eq!(options.target_language, "en");
    assert_eq!(options.output_format, "txt");
    assert!(!options.overwrite);
}

#[test]
fn test_document_title_shouldNameFileAndLanguages() {
    assert_eq!(
        Controller::document_title(Path::new("/tmp/docs/report.pdf"), "de", "en"),
        "Translation of report.pdf from de to en"
    );
}

#[test]
fn test_prompter_confirm_shouldOnlyAcceptYes() {
    assert!(ScriptedPrompter::new(&["y"]).confirm("?").unwrap());
    assert!(ScriptedPrompter::new(&["Yes"]).confirm("?").unwrap());
    assert!(!ScriptedPrompter::new(&["n"]).confirm("?").unwrap());
    assert!(!NonInteractivePrompter.confirm("?").unwrap());
}
