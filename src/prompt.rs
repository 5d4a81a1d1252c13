/*!
 * Console prompts.
 *
 * The binary asks for options the user left out and for confirmation before
 * overwriting an existing output file. The [`Prompter`] trait keeps that
 * interaction replaceable, so runs without a terminal (and tests) can answer
 * without blocking on stdin.
 */

use std::io::{self, BufRead, Write};

/// Source of answers to interactive questions
pub trait Prompter {
    /// Ask a question and return the trimmed answer (empty for "use default")
    fn ask(&self, question: &str) -> io::Result<String>;

    /// Ask a yes/no question; only `y` / `yes` counts as yes
    fn confirm(&self, question: &str) -> io::Result<bool> {
        let answer = self.ask(question)?.to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

/// Reads answers from stdin, printing questions on stdout
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&self, question: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "\n{}", question)?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Answers every question with an empty string, i.e. the default
#[derive(Debug, Default)]
pub struct NonInteractivePrompter;

impl Prompter for NonInteractivePrompter {
    fn ask(&self, _question: &str) -> io::Result<String> {
        Ok(String::new())
    }
}
