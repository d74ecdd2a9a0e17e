//! Script classification
//!
//! Cheap checks that decide whether text is worth transliterating at all.

use once_cell::sync::Lazy;
use regex::Regex;

/// Main Cherokee block, including the lowercase tail U+13F8..=U+13FD.
const CHEROKEE_BLOCK: std::ops::RangeInclusive<u32> = 0x13A0..=0x13FF;

/// Cherokee Supplement block (lowercase letters).
const CHEROKEE_SUPPLEMENT: std::ops::RangeInclusive<u32> = 0xAB70..=0xABBF;

/// "ᏓᎵᏆ" with optional stray whitespace between the syllables.
static LOOSE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Ꮣ\s*Ꮅ\s*Ꮖ").expect("marker pattern is valid"));

/// True if `c` lies in either Cherokee block.
pub fn is_cherokee_char(c: char) -> bool {
    let cp = c as u32;
    CHEROKEE_BLOCK.contains(&cp) || CHEROKEE_SUPPLEMENT.contains(&cp)
}

/// True iff `text` contains at least one Cherokee code point.
pub fn contains_cherokee(text: &str) -> bool {
    text.chars().any(is_cherokee_char)
}

/// Page-level gate run over a container's rendered text before any tree walk.
///
/// A false positive only means the per-leaf checks run.
pub fn looks_already_annotated(root_text: &str) -> bool {
    contains_cherokee(root_text) || LOOSE_MARKER.is_match(root_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_cherokee_canonical() {
        assert!(contains_cherokee("Ꭰ"));
        assert!(contains_cherokee("Hello ᏣᎳᎩ world"));
    }

    #[test]
    fn test_contains_cherokee_lowercase() {
        assert!(contains_cherokee("\u{AB70}"));
        assert!(contains_cherokee("x\u{ABBF}"));
        assert!(contains_cherokee("\u{13F8}"));
    }

    #[test]
    fn test_contains_cherokee_rejects_other_scripts() {
        assert!(!contains_cherokee(""));
        assert!(!contains_cherokee("plain ASCII text"));
        assert!(!contains_cherokee("ᐊᐃᐅ")); // Canadian syllabics
        assert!(!contains_cherokee("\u{139F}\u{1400}\u{AB6F}\u{ABC0}"));
    }

    #[test]
    fn test_gate_accepts_marker_with_any_spacing() {
        assert!(looks_already_annotated("ᏓᎵᏆ"));
        assert!(looks_already_annotated("Ꮣ Ꮅ Ꮖ"));
        assert!(looks_already_annotated("Ꮣ\n\t  Ꮅ\u{00A0}Ꮖ"));
    }

    #[test]
    fn test_gate_rejects_plain_ascii() {
        assert!(!looks_already_annotated("The quick brown fox"));
        assert!(!looks_already_annotated(""));
    }
}
