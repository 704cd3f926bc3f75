use serde::Serialize;

/// A classified unit of article body text.
///
/// Serializes as `{"type": "heading", "content": "..."}`, the shape the
/// rendering layer picks markup from. List content is the item array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum ContentBlock {
    /// A short, punctuation-free line rendered as a section heading.
    Heading(String),
    /// Running prose.
    Paragraph(String),
    /// A run of consecutive bullet lines, glyphs stripped.
    List(Vec<String>),
}

impl ContentBlock {
    /// Visible text of the block in reading order.
    ///
    /// Headings and paragraphs yield one line, lists one line per item.
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            ContentBlock::Heading(text) | ContentBlock::Paragraph(text) => {
                std::slice::from_ref(text)
            }
            ContentBlock::List(items) => items,
        };
        items.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, ContentBlock::List(_))
    }

    #[must_use]
    pub fn is_heading(&self) -> bool {
        matches!(self, ContentBlock::Heading(_))
    }
}
