use super::kinds::Bullet;

/// Trims whitespace and byte-order marks, which editors sometimes leave at
/// the start of a pasted line.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Classification of a single content line containing only local facts.
///
/// This is phase 1 of content parsing: each line is classified independently
/// without reference to its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// The line with surrounding whitespace removed.
    pub text: String,
    /// Whether the line is blank (empty or whitespace only).
    pub is_blank: bool,
    /// Item text with the bullet glyph stripped, if the line is a bullet.
    pub bullet_item: Option<String>,
}

/// Classifies individual lines for the block construction phase.
pub struct ContentLineClassifier;

impl ContentLineClassifier {
    /// Classifies a raw translated line into a [`LineClass`].
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = trim_line(line);
        LineClass {
            text: trimmed.to_string(),
            is_blank: trimmed.is_empty(),
            bullet_item: Bullet::strip(trimmed).map(str::to_string),
        }
    }
}
