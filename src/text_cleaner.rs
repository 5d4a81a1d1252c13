/*!
 * Cleanup of text extracted from PDF files.
 *
 * PDF extraction tends to leave two kinds of damage behind: words split over
 * a line break with a trailing hyphen, and words whose letters come out
 * separated by spaces ("T r a n s l a t e"). Both repairs are plain regex
 * substitutions, applied in that order.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Hyphen at the end of a line, with any whitespace around the line break
static HYPHEN_LINEBREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\s*\n\s*").unwrap());

/// At least three single letters separated by spaces (an optional hyphen may
/// precede each space)
static SPACED_LETTERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:[A-Za-zÀ-ÖØ-öø-ÿ]-? ){2,}[A-Za-zÀ-ÖØ-öø-ÿ]\b").unwrap()
});

/// Merge words split across lines with hyphens
pub fn fix_hyphen_linebreaks(text: &str) -> String {
    HYPHEN_LINEBREAK.replace_all(text, "").into_owned()
}

/// Collapse runs of space-separated single letters back into one word
pub fn fix_single_letter_spacing(text: &str) -> String {
    SPACED_LETTERS
        .replace_all(text, |caps: &Captures| {
            caps[0].replace("- ", "-").replace(' ', "")
        })
        .into_owned()
}

/// Apply every cleanup pass to extracted text.
///
/// Hyphenated line breaks are repaired first so the spacing pass sees whole words.
pub fn clean_extracted_text(text: &str) -> String {
    let text = fix_hyphen_linebreaks(text);
    fix_single_letter_spacing(&text)
}
