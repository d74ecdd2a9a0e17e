//! Offset conversion
//!
//! Rust slices text by UTF-8 byte offset; DOM `Range` boundaries count
//! UTF-16 code units.

/// UTF-16 offset of byte offset `byte_offset` in `text`.
///
/// Offsets past the end (or not on a char boundary) clamp to the full length.
pub fn utf16_offset(text: &str, byte_offset: usize) -> u32 {
    let prefix = text.get(..byte_offset).unwrap_or(text);
    prefix.encode_utf16().count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets_are_unchanged() {
        assert_eq!(utf16_offset("hello", 3), 3);
    }

    #[test]
    fn test_cherokee_is_one_unit_per_letter() {
        // three bytes each in UTF-8, one unit each in UTF-16
        let text = "ᏓᎵᏆ ᎠᏂ";
        assert_eq!(utf16_offset(text, 9), 3);
        assert_eq!(utf16_offset(text, 10), 4);
        assert_eq!(utf16_offset(text, text.len()), 6);
    }

    #[test]
    fn test_astral_chars_take_two_units() {
        assert_eq!(utf16_offset("😀a", 4), 2);
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(utf16_offset("ab", 10), 2);
    }
}
