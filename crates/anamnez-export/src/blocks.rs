//! The markdown subset shared by the PDF and DOCX writers.
//!
//! - `# Heading` / `## Heading` / `### Heading` → headings
//! - `- item` → bullet
//! - `**bold**` → bold span
//! - `---` or `***` → page break
//! - blank line → vertical space
//! - `\text` → literal paragraph, no markup applied to `text`
//! - everything else → paragraph

/// Marks a line as literal text.
pub const LITERAL_MARKER: char = '\\';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Heading { level: u8, text: &'a str },
    Bullet(&'a str),
    Paragraph(&'a str),
    /// Text shown exactly as written, e.g. a patient's answer.
    Literal(&'a str),
    PageBreak,
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Bold(&'a str),
}

impl<'a> Span<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Span::Plain(t) | Span::Bold(t) => t,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Span::Bold(_))
    }
}

pub fn parse_blocks(rendered: &str) -> Vec<Block<'_>> {
    rendered
        .lines()
        .map(|line| {
            let trimmed = line.trim();
            if let Some(text) = trimmed.strip_prefix(LITERAL_MARKER) {
                Block::Literal(text.trim_start())
            } else if trimmed.is_empty() {
                Block::Blank
            } else if let Some(text) = trimmed.strip_prefix("### ") {
                Block::Heading { level: 3, text }
            } else if let Some(text) = trimmed.strip_prefix("## ") {
                Block::Heading { level: 2, text }
            } else if let Some(text) = trimmed.strip_prefix("# ") {
                Block::Heading { level: 1, text }
            } else if let Some(text) = trimmed.strip_prefix("- ") {
                Block::Bullet(text)
            } else if trimmed == "---" || trimmed == "***" {
                Block::PageBreak
            } else {
                Block::Paragraph(trimmed)
            }
        })
        .collect()
}

/// Split `**bold**` segments out of a line. An unclosed `**` leaves the rest
/// of the line plain.
pub fn parse_inline(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let before = &remaining[..start];
        if !before.is_empty() {
            spans.push(Span::Plain(before));
        }

        let after_start = &remaining[start + 2..];
        if let Some(end) = after_start.find("**") {
            let bold = &after_start[..end];
            if !bold.is_empty() {
                spans.push(Span::Bold(bold));
            }
            remaining = &after_start[end + 2..];
        } else {
            spans.push(Span::Plain(&remaining[start..]));
            return spans;
        }
    }

    if !remaining.is_empty() {
        spans.push(Span::Plain(remaining));
    }

    spans
}

/// Turn arbitrary text into a single literal line.
///
/// Whitespace runs, line breaks included, collapse to one space so the text
/// cannot start a new block.
pub fn literal_line(text: &str) -> String {
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("{LITERAL_MARKER}{flattened}")
}
