//! Emoji properties from emoji-data.txt.

use crate::{range_contains, Range};

include!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/generated/unicode14/emoji.rs"
));

/// Extended_Pictographic, the emoji class consulted by the grapheme and
/// word boundary rules (GB11, WB3c).
#[must_use]
pub fn is_extended_pictographic(ch: char) -> bool {
    range_contains(ch as u32, EXTENDED_PICTOGRAPHIC_RANGES)
}

#[cfg(test)]
mod tests {
    use super::is_extended_pictographic;

    #[test]
    fn pictographs() {
        assert!(is_extended_pictographic('\u{1F469}'));
        assert!(is_extended_pictographic('\u{2764}'));
        assert!(is_extended_pictographic('\u{00A9}'));
        assert!(!is_extended_pictographic('a'));
        assert!(!is_extended_pictographic('\u{200D}'));
    }
}
