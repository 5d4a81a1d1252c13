// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use pdf_translator::app_config::{self, Config, TranslationProvider};
use pdf_translator::prompt::{NonInteractivePrompter, Prompter, StdinPrompter};
use pdf_translator::{Controller, RequestedOptions};

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    Google,
    Ollama,
    Anthropic,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::Google => TranslationProvider::Google,
            CliTranslationProvider::Ollama => TranslationProvider::Ollama,
            CliTranslationProvider::Anthropic => TranslationProvider::Anthropic,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for pdf-translator
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// pdf-translator - translate the text of a PDF file
///
/// Extracts the text of a PDF, optionally cleans extraction artifacts,
/// translates it and writes the result next to the input file.
#[derive(Parser, Debug)]
#[command(name = "pdf-translator")]
#[command(version)]
#[command(about = "Translate a PDF file")]
#[command(long_about = "pdf-translator extracts the text of a PDF file, translates it and saves the result as txt, html or md.

EXAMPLES:
    pdf-translator paper.pdf                      # Detect the language, translate to English
    pdf-translator -s german -t fr paper.pdf      # German to French
    pdf-translator -c -e md paper.pdf             # Clean extracted text, write Markdown
    pdf-translator -f -t ja paper.pdf             # Overwrite an existing translation
    pdf-translator -p ollama -m llama3.2:3b a.pdf # Translate with a local LLM
    pdf-translator completions bash > pdf-translator.bash

Options left out on the command line are asked for interactively when stdin is
a terminal. Output is written to <name>_<src>_<tgt>.<ext> next to the input.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the input PDF file
    #[arg(value_name = "PDF_PATH")]
    pdf_path: Option<PathBuf>,

    /// Source language, name or code (auto-detected when omitted)
    #[arg(short, long = "src", visible_alias = "src-lang")]
    source_language: Option<String>,

    /// Target language, name or code (default: en)
    #[arg(short, long = "tgt", visible_alias = "tgt-lang")]
    target_language: Option<String>,

    /// Overwrite existing files if output exists
    #[arg(short = 'f', long)]
    overwrite: bool,

    /// Clean text before translation
    #[arg(short, long)]
    clean: bool,

    /// Output file format (txt, html, md)
    #[arg(short, long = "ext")]
    extension: Option<String>,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Model name for LLM providers
    #[arg(short, long)]
    model: Option<String>,

    /// API key for the selected provider
    #[arg(long, env = "PDF_TRANSLATOR_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Configuration file path
    #[arg(long = "config", default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Never ask questions; use defaults for anything not given
    #[arg(long)]
    no_prompt: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and prefix for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "❌"),
            Level::Warn => ("\x1B[1;33m", "🚧"),
            Level::Info => ("\x1B[1;32m", ""),
            Level::Debug => ("\x1B[1;36m", "🔍"),
            Level::Trace => ("\x1B[1;35m", "📋"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, prefix) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, prefix, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() {
    // Install the logger at trace and narrow it with set_max_level once the
    // configured level is known
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "pdf-translator", &mut std::io::stdout());
        return;
    }

    if let Err(e) = run_translate(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run_translate(options: CommandLineOptions) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let mut config = Config::load_or_default(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(provider) = &options.provider {
        config.translation.provider = provider.clone().into();
    }
    if let Some(model) = &options.model {
        config.translation.active_provider_config_mut().model = model.clone();
    }
    if let Some(api_key) = &options.api_key {
        config.translation.active_provider_config_mut().api_key = api_key.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate()
        .context("Configuration validation failed")?;

    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let interactive = !options.no_prompt && std::io::stdin().is_terminal();
    let prompter: Box<dyn Prompter> = if interactive {
        Box::new(StdinPrompter)
    } else {
        Box::new(NonInteractivePrompter)
    };

    let requested = RequestedOptions {
        pdf_path: options.pdf_path,
        source_language: options.source_language,
        target_language: options.target_language,
        clean: options.clean,
        output_format: options.extension,
        overwrite: options.overwrite,
    };
    let run_options = requested.resolve(&config, prompter.as_ref())?;

    let controller = Controller::with_config(&config)?;
    controller.run(&run_options, prompter.as_ref()).await?;

    Ok(())
}
