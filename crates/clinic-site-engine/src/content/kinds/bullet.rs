use crate::content::classify::trim_line;

/// Bullet list item with its owned marker glyph.
///
/// All knowledge of how translators mark list items lives here, not in the
/// classifier or builder.
pub struct Bullet;

impl Bullet {
    /// The glyph translators put in front of list items.
    pub const GLYPH: char = '•';

    /// Returns the item text if `trimmed` is a bullet line.
    ///
    /// The glyph and any whitespace after it are removed. A bare glyph
    /// yields an empty item.
    pub fn strip(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::GLYPH).map(trim_line)
    }

    /// Renders an item back into a bullet line.
    pub fn line(item: &str) -> String {
        format!("{} {item}", Self::GLYPH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_glyph_and_space() {
        assert_eq!(Bullet::strip("• Point one"), Some("Point one"));
    }

    #[test]
    fn strips_glyph_without_space() {
        assert_eq!(Bullet::strip("•Point"), Some("Point"));
    }

    #[test]
    fn strips_mixed_whitespace_after_glyph() {
        assert_eq!(Bullet::strip("•\t  Point"), Some("Point"));
    }

    #[test]
    fn bare_glyph_is_empty_item() {
        assert_eq!(Bullet::strip("•"), Some(""));
    }

    #[test]
    fn other_markers_are_not_bullets() {
        assert_eq!(Bullet::strip("- Point"), None);
        assert_eq!(Bullet::strip("* Point"), None);
    }

    #[test]
    fn glyph_must_lead() {
        assert_eq!(Bullet::strip("Point • one"), None);
    }

    #[test]
    fn line_round_trips_through_strip() {
        assert_eq!(Bullet::strip(&Bullet::line("Point one")), Some("Point one"));
    }
}
