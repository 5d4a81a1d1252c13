/*!
 * Splitting of long documents into request-sized chunks.
 *
 * Backends limit how much text one request may carry. Documents are cut on
 * line boundaries where possible, long lines on spaces, and only as a last
 * resort in the middle of a word. Whitespace around each chunk is kept aside
 * and put back around the translation, so paragraph breaks survive even when
 * a backend trims its output.
 */

/// One piece of a document, with its surrounding whitespace split off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    /// Whitespace before the content
    pub leading: String,
    /// Text sent to the translator
    pub content: String,
    /// Whitespace after the content
    pub trailing: String,
}

impl TextChunk {
    /// Split a raw piece of text into leading whitespace, content and trailing whitespace
    pub fn from_raw(raw: &str) -> Self {
        let without_leading = raw.trim_start();
        let leading = &raw[..raw.len() - without_leading.len()];
        let content = without_leading.trim_end();
        let trailing = &without_leading[content.len()..];

        Self {
            leading: leading.to_string(),
            content: content.to_string(),
            trailing: trailing.to_string(),
        }
    }

    /// Whether there is anything to translate
    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    /// Re-attach the surrounding whitespace to a translated content
    pub fn wrap(&self, translated: &str) -> String {
        format!("{}{}{}", self.leading, translated, self.trailing)
    }
}

/// Split text into chunks of at most `max_chars` characters.
///
/// `max_chars == 0` disables splitting. Concatenating `leading + content +
/// trailing` of every chunk gives back the input.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<TextChunk> {
    if text.is_empty() {
        return Vec::new();
    }
    if max_chars == 0 {
        return vec![TextChunk::from_raw(text)];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split_inclusive('\n') {
        for piece in split_long_line(line, max_chars) {
            let piece_len = piece.chars().count();
            if current_len + piece_len > max_chars && !current.is_empty() {
                chunks.push(TextChunk::from_raw(&current));
                current.clear();
                current_len = 0;
            }
            current.push_str(piece);
            current_len += piece_len;
        }
    }

    if !current.is_empty() {
        chunks.push(TextChunk::from_raw(&current));
    }

    chunks
}

/// Cut a single line into pieces of at most `max_chars` characters, preferring
/// to cut right after a space
fn split_long_line(line: &str, max_chars: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = line;

    while rest.chars().count() > max_chars {
        let limit = rest
            .char_indices()
            .nth(max_chars)
            .map(|(index, _)| index)
            .unwrap_or(rest.len());
        let cut = rest[..limit].rfind(' ').map(|index| index + 1).unwrap_or(limit);

        pieces.push(&rest[..cut]);
        rest = &rest[cut..];
    }

    if !rest.is_empty() {
        pieces.push(rest);
    }
    pieces
}
