//! Cherokee → Latin transliteration
//!
//! Stateless character mapping: lowercase forms are first folded onto the
//! canonical block, then every canonical letter is replaced by its
//! romanization. Anything without a mapping (spaces, punctuation, Latin
//! letters, unassigned Cherokee code points) is copied through unchanged.

use crate::syllabary::{canonical_for, latin_for};
use std::borrow::Cow;

/// Replace every lowercase Cherokee letter with its canonical form.
pub fn normalize(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| canonical_for(c).is_some()) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| canonical_for(c).unwrap_or(c))
            .collect(),
    )
}

/// Transliterate `text` syllable by syllable.
pub fn transliterate(text: &str) -> String {
    let normalized = normalize(text);
    let mut out = String::with_capacity(normalized.len());
    for c in normalized.chars() {
        match latin_for(c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}
