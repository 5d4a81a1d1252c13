/*!
 * Output formatting for translated documents.
 *
 * Wraps translated text in one of three templates: plain text, a minimal
 * HTML page with the text in a `<pre>` block, or Markdown with the text in a
 * fenced code block.
 */

use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Signature shared by all formatters: `(content, title) -> document`
pub type Formatter = fn(&str, Option<&str>) -> String;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Txt,
    Html,
    Md,
}

impl OutputFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Html => "html",
            Self::Md => "md",
        }
    }

    pub fn formatter(&self) -> Formatter {
        match self {
            Self::Txt => format_as_text,
            Self::Html => format_as_html,
            Self::Md => format_as_markdown,
        }
    }

    /// Render content with this format
    pub fn render(&self, content: &str, title: Option<&str>) -> String {
        (self.formatter())(content, title)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "txt" => Ok(Self::Txt),
            "html" => Ok(Self::Html),
            "md" => Ok(Self::Md),
            _ => Err(AppError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Get the formatter for a format selector; unknown selectors get plain text
pub fn get_formatter(format_type: &str) -> Formatter {
    format_type
        .parse::<OutputFormat>()
        .unwrap_or_default()
        .formatter()
}

/// Plain text: content unchanged, title ignored
pub fn format_as_text(content: &str, _title: Option<&str>) -> String {
    content.to_string()
}

/// Minimal standalone HTML page
pub fn format_as_html(content: &str, title: Option<&str>) -> String {
    let title_tag = title
        .map(|t| format!("<title>{}</title>", escape_html(t)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    {title_tag}
    <style>
        body {{
            font-family: Arial, sans-serif;
            line-height: 1.6;
            margin: 20px;
            max-width: 900px;
        }}
        pre {{
            white-space: pre-wrap;
            background-color: #f5f5f5;
            padding: 10px;
            border-radius: 5px;
        }}
    </style>
</head>
<body>
    <pre>{content}</pre>
</body>
</html>"#,
        title_tag = title_tag,
        content = escape_html(content)
    )
}

/// Markdown: optional `# title` heading, then the content in a fenced block
pub fn format_as_markdown(content: &str, title: Option<&str>) -> String {
    let title_section = title.map(|t| format!("# {}\n\n", t)).unwrap_or_default();
    format!("{}```\n{}\n```", title_section, content)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
