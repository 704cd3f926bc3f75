/// Decides whether a non-bullet line is a heading or a paragraph.
///
/// Translated content carries no explicit tagging, so the choice is a
/// policy. Swap the implementation once content is tagged per line.
pub trait HeadingPolicy {
    /// `line` is already trimmed, non-empty and not a bullet.
    fn is_heading(&self, line: &str) -> bool;
}

/// Punctuation heuristic: short lines without sentence punctuation are
/// headings.
///
/// Length is measured in UTF-16 code units, the unit the published site
/// compares against, so an emoji counts as two. Short punctuation-free
/// sentences are misread as headings. That matches the published site and
/// is kept as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct PunctuationHeadingPolicy;

impl PunctuationHeadingPolicy {
    /// Headings are strictly shorter than this many UTF-16 code units.
    pub const MAX_CHARS: usize = 110;
    /// Any of these makes a line prose.
    pub const SENTENCE_MARKS: [char; 3] = ['.', '!', '—'];
}

impl HeadingPolicy for PunctuationHeadingPolicy {
    fn is_heading(&self, line: &str) -> bool {
        line.encode_utf16().count() < Self::MAX_CHARS && !line.contains(Self::SENTENCE_MARKS)
    }
}
