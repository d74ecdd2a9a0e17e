//! Cherokee syllabary tables
//!
//! Read-only lookups over the static data in [`table`]:
//! canonical letter → Latin romanization, lowercase form → canonical letter.

pub mod table;

pub use table::{LowercaseAlias, SyllabaryEntry, LOWERCASE_ALIASES, SYLLABARY};

use once_cell::sync::Lazy;
use std::collections::HashMap;

static LATIN_BY_CANONICAL: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| SYLLABARY.iter().map(|e| (e.canonical, e.latin)).collect());

static CANONICAL_BY_LOWERCASE: Lazy<HashMap<char, char>> = Lazy::new(|| {
    LOWERCASE_ALIASES
        .iter()
        .map(|a| (a.lowercase, a.canonical))
        .collect()
});

/// Latin romanization of a canonical syllabary letter.
///
/// Lowercase forms are not looked up here; normalize them first.
pub fn latin_for(c: char) -> Option<&'static str> {
    LATIN_BY_CANONICAL.get(&c).copied()
}

/// Canonical letter for a lowercase presentation form.
pub fn canonical_for(c: char) -> Option<char> {
    CANONICAL_BY_LOWERCASE.get(&c).copied()
}

pub fn entries() -> &'static [SyllabaryEntry] {
    &SYLLABARY
}

pub fn aliases() -> &'static [LowercaseAlias] {
    &LOWERCASE_ALIASES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_covers_canonical_block_once() {
        let letters: Vec<u32> = SYLLABARY.iter().map(|e| e.canonical as u32).collect();
        let expected: Vec<u32> = (0x13A0..=0x13F4).collect();
        assert_eq!(letters, expected);
    }

    #[test]
    fn test_romanizations_are_short_ascii() {
        for entry in SYLLABARY.iter() {
            assert!(!entry.latin.is_empty(), "{:?} has empty romanization", entry.canonical);
            assert!(entry.latin.len() <= 4, "{:?} → {}", entry.canonical, entry.latin);
            assert!(entry.latin.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_vowels_map_to_single_letters() {
        let vowels: String = ('\u{13A0}'..='\u{13A5}')
            .map(|c| latin_for(c).unwrap())
            .collect();
        assert_eq!(vowels, "aeiouv");
    }

    #[test]
    fn test_irregular_entries() {
        assert_eq!(latin_for('Ꮏ'), Some("hna"));
        assert_eq!(latin_for('Ꮐ'), Some("nah"));
        assert_eq!(latin_for('Ꮝ'), Some("s"));
        assert_eq!(latin_for('Ꮬ'), Some("dla"));
        assert_eq!(latin_for('Ꮖ'), Some("qua"));
    }

    #[test]
    fn test_every_alias_targets_a_table_entry() {
        for alias in LOWERCASE_ALIASES.iter() {
            assert!(
                latin_for(alias.canonical).is_some(),
                "{:?} aliases {:?} which has no romanization",
                alias.lowercase,
                alias.canonical
            );
        }
    }

    #[test]
    fn test_aliases_are_one_to_one() {
        let lower: HashSet<char> = LOWERCASE_ALIASES.iter().map(|a| a.lowercase).collect();
        let upper: HashSet<char> = LOWERCASE_ALIASES.iter().map(|a| a.canonical).collect();
        assert_eq!(lower.len(), 85);
        assert_eq!(upper.len(), 85);
    }

    #[test]
    fn test_lowercase_and_canonical_sets_are_disjoint() {
        let canonical: HashSet<char> = SYLLABARY.iter().map(|e| e.canonical).collect();
        assert!(LOWERCASE_ALIASES.iter().all(|a| !canonical.contains(&a.lowercase)));
    }

    #[test]
    fn test_aliases_agree_with_unicode_case_mapping() {
        for alias in LOWERCASE_ALIASES.iter() {
            let upper: Vec<char> = alias.lowercase.to_uppercase().collect();
            assert_eq!(upper, vec![alias.canonical], "{:?}", alias.lowercase);
        }
    }

    #[test]
    fn test_unmapped_letters() {
        // mv has no romanization in this scheme
        assert_eq!(latin_for('\u{13F5}'), None);
        assert_eq!(canonical_for('\u{13FD}'), None);
        assert_eq!(latin_for('a'), None);
    }
}
