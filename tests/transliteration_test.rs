// Transliteration over whole strings: syllabary, lowercase forms, pass-through

use cherokee_translit::syllabary::{aliases, entries, latin_for};
use cherokee_translit::{contains_cherokee, looks_already_annotated, normalize, transliterate};

#[test]
fn test_word_transliteration() {
    assert_eq!(transliterate("ᏣᎳᎩ"), "tsalagi");
    assert_eq!(transliterate("ᎠᏂᏬᏂᏍᎪ"), "aniwonisgo");
    assert_eq!(transliterate("ᏓᎵᏆ"), "daliqua");
}

#[test]
fn test_lowercase_transliterates_like_uppercase() {
    // ꮳꮃꭹ
    assert_eq!(transliterate("\u{ABB3}\u{AB83}\u{AB79}"), "tsalagi");
    // ᏸ..ᏼ fold onto Ᏸ..Ᏼ
    assert_eq!(transliterate("\u{13F8}"), transliterate("\u{13F0}"));
}

#[test]
fn test_every_lowercase_form_normalizes_to_its_canonical() {
    for alias in aliases() {
        let lower = alias.lowercase.to_string();
        assert_eq!(normalize(&lower), alias.canonical.to_string());
        assert_eq!(transliterate(&lower), transliterate(&alias.canonical.to_string()));
    }
}

#[test]
fn test_every_entry_transliterates_to_its_latin() {
    for entry in entries() {
        assert_eq!(transliterate(&entry.canonical.to_string()), entry.latin);
        assert_eq!(latin_for(entry.canonical), Some(entry.latin));
    }
}

#[test]
fn test_non_cherokee_passes_through() {
    let text = "Osiyo, 123 ¿qué? 日本語 🙂 café";
    assert_eq!(transliterate(text), text);
    assert_eq!(normalize(text), text);
}

#[test]
fn test_mixed_text_keeps_surroundings() {
    assert_eq!(transliterate("(ᏣᎳᎩ) news"), "(tsalagi) news");
    assert_eq!(transliterate("ᎠᎾ\nᎠᎾ"), "ana\nana");
}

#[test]
fn test_unmapped_block_code_points_pass_through() {
    // Inside the Cherokee block but outside the 85-entry table
    assert_eq!(transliterate("\u{13F5}\u{13FD}"), "\u{13F5}\u{13FD}");
    assert!(contains_cherokee("\u{13F5}"));
}

#[test]
fn test_gate() {
    assert!(looks_already_annotated("Title ᏣᎳᎩ"));
    assert!(looks_already_annotated("\u{AB79}"));
    assert!(looks_already_annotated("Ꮣ \t Ꮅ\nᏆ"));
    assert!(!looks_already_annotated("Plain ASCII text only."));
    assert!(!looks_already_annotated(""));
}
