//! Static syllabary data
//!
//! One romanization per canonical syllabary letter (U+13A0..=U+13F4) and one
//! alias per lowercase presentation form. The lowercase forms live in two
//! places: the Cherokee Supplement block (U+AB70..=U+ABBF) and the tail of the
//! main block (U+13F8..=U+13FC).

/// A canonical syllabary letter and its Latin romanization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllabaryEntry {
    pub canonical: char,
    pub latin: &'static str,
}

impl SyllabaryEntry {
    const fn new(canonical: char, latin: &'static str) -> Self {
        Self { canonical, latin }
    }
}

/// A lowercase presentation form and the canonical letter it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowercaseAlias {
    pub lowercase: char,
    pub canonical: char,
}

impl LowercaseAlias {
    const fn new(lowercase: char, canonical: char) -> Self {
        Self { lowercase, canonical }
    }
}

// ============================================================================
// Canonical block: broad/standard romanization
// ============================================================================

pub const SYLLABARY: [SyllabaryEntry; 85] = [
    SyllabaryEntry::new('\u{13A0}', "a"), // Ꭰ
    SyllabaryEntry::new('\u{13A1}', "e"), // Ꭱ
    SyllabaryEntry::new('\u{13A2}', "i"), // Ꭲ
    SyllabaryEntry::new('\u{13A3}', "o"), // Ꭳ
    SyllabaryEntry::new('\u{13A4}', "u"), // Ꭴ
    SyllabaryEntry::new('\u{13A5}', "v"), // Ꭵ
    SyllabaryEntry::new('\u{13A6}', "ga"), // Ꭶ
    SyllabaryEntry::new('\u{13A7}', "ka"), // Ꭷ
    SyllabaryEntry::new('\u{13A8}', "ge"), // Ꭸ
    SyllabaryEntry::new('\u{13A9}', "gi"), // Ꭹ
    SyllabaryEntry::new('\u{13AA}', "go"), // Ꭺ
    SyllabaryEntry::new('\u{13AB}', "gu"), // Ꭻ
    SyllabaryEntry::new('\u{13AC}', "gv"), // Ꭼ
    SyllabaryEntry::new('\u{13AD}', "ha"), // Ꭽ
    SyllabaryEntry::new('\u{13AE}', "he"), // Ꭾ
    SyllabaryEntry::new('\u{13AF}', "hi"), // Ꭿ
    SyllabaryEntry::new('\u{13B0}', "ho"), // Ꮀ
    SyllabaryEntry::new('\u{13B1}', "hu"), // Ꮁ
    SyllabaryEntry::new('\u{13B2}', "hv"), // Ꮂ
    SyllabaryEntry::new('\u{13B3}', "la"), // Ꮃ
    SyllabaryEntry::new('\u{13B4}', "le"), // Ꮄ
    SyllabaryEntry::new('\u{13B5}', "li"), // Ꮅ
    SyllabaryEntry::new('\u{13B6}', "lo"), // Ꮆ
    SyllabaryEntry::new('\u{13B7}', "lu"), // Ꮇ
    SyllabaryEntry::new('\u{13B8}', "lv"), // Ꮈ
    SyllabaryEntry::new('\u{13B9}', "ma"), // Ꮉ
    SyllabaryEntry::new('\u{13BA}', "me"), // Ꮊ
    SyllabaryEntry::new('\u{13BB}', "mi"), // Ꮋ
    SyllabaryEntry::new('\u{13BC}', "mo"), // Ꮌ
    SyllabaryEntry::new('\u{13BD}', "mu"), // Ꮍ
    SyllabaryEntry::new('\u{13BE}', "na"), // Ꮎ
    SyllabaryEntry::new('\u{13BF}', "hna"), // Ꮏ
    SyllabaryEntry::new('\u{13C0}', "nah"), // Ꮐ
    SyllabaryEntry::new('\u{13C1}', "ne"), // Ꮑ
    SyllabaryEntry::new('\u{13C2}', "ni"), // Ꮒ
    SyllabaryEntry::new('\u{13C3}', "no"), // Ꮓ
    SyllabaryEntry::new('\u{13C4}', "nu"), // Ꮔ
    SyllabaryEntry::new('\u{13C5}', "nv"), // Ꮕ
    SyllabaryEntry::new('\u{13C6}', "qua"), // Ꮖ
    SyllabaryEntry::new('\u{13C7}', "que"), // Ꮗ
    SyllabaryEntry::new('\u{13C8}', "qui"), // Ꮘ
    SyllabaryEntry::new('\u{13C9}', "quo"), // Ꮙ
    SyllabaryEntry::new('\u{13CA}', "quu"), // Ꮚ
    SyllabaryEntry::new('\u{13CB}', "quv"), // Ꮛ
    SyllabaryEntry::new('\u{13CC}', "sa"), // Ꮜ
    SyllabaryEntry::new('\u{13CD}', "s"), // Ꮝ
    SyllabaryEntry::new('\u{13CE}', "se"), // Ꮞ
    SyllabaryEntry::new('\u{13CF}', "si"), // Ꮟ
    SyllabaryEntry::new('\u{13D0}', "so"), // Ꮠ
    SyllabaryEntry::new('\u{13D1}', "su"), // Ꮡ
    SyllabaryEntry::new('\u{13D2}', "sv"), // Ꮢ
    SyllabaryEntry::new('\u{13D3}', "da"), // Ꮣ
    SyllabaryEntry::new('\u{13D4}', "ta"), // Ꮤ
    SyllabaryEntry::new('\u{13D5}', "de"), // Ꮥ
    SyllabaryEntry::new('\u{13D6}', "te"), // Ꮦ
    SyllabaryEntry::new('\u{13D7}', "di"), // Ꮧ
    SyllabaryEntry::new('\u{13D8}', "ti"), // Ꮨ
    SyllabaryEntry::new('\u{13D9}', "do"), // Ꮩ
    SyllabaryEntry::new('\u{13DA}', "du"), // Ꮪ
    SyllabaryEntry::new('\u{13DB}', "dv"), // Ꮫ
    SyllabaryEntry::new('\u{13DC}', "dla"), // Ꮬ
    SyllabaryEntry::new('\u{13DD}', "tla"), // Ꮭ
    SyllabaryEntry::new('\u{13DE}', "tle"), // Ꮮ
    SyllabaryEntry::new('\u{13DF}', "tli"), // Ꮯ
    SyllabaryEntry::new('\u{13E0}', "tlo"), // Ꮰ
    SyllabaryEntry::new('\u{13E1}', "tlu"), // Ꮱ
    SyllabaryEntry::new('\u{13E2}', "tlv"), // Ꮲ
    SyllabaryEntry::new('\u{13E3}', "tsa"), // Ꮳ
    SyllabaryEntry::new('\u{13E4}', "tse"), // Ꮴ
    SyllabaryEntry::new('\u{13E5}', "tsi"), // Ꮵ
    SyllabaryEntry::new('\u{13E6}', "tso"), // Ꮶ
    SyllabaryEntry::new('\u{13E7}', "tsu"), // Ꮷ
    SyllabaryEntry::new('\u{13E8}', "tsv"), // Ꮸ
    SyllabaryEntry::new('\u{13E9}', "wa"), // Ꮹ
    SyllabaryEntry::new('\u{13EA}', "we"), // Ꮺ
    SyllabaryEntry::new('\u{13EB}', "wi"), // Ꮻ
    SyllabaryEntry::new('\u{13EC}', "wo"), // Ꮼ
    SyllabaryEntry::new('\u{13ED}', "wu"), // Ꮽ
    SyllabaryEntry::new('\u{13EE}', "wv"), // Ꮾ
    SyllabaryEntry::new('\u{13EF}', "ya"), // Ꮿ
    SyllabaryEntry::new('\u{13F0}', "ye"), // Ᏸ
    SyllabaryEntry::new('\u{13F1}', "yi"), // Ᏹ
    SyllabaryEntry::new('\u{13F2}', "yo"), // Ᏺ
    SyllabaryEntry::new('\u{13F3}', "yu"), // Ᏻ
    SyllabaryEntry::new('\u{13F4}', "yv"), // Ᏼ
];

// ============================================================================
// Lowercase forms → canonical letters
// ============================================================================

pub const LOWERCASE_ALIASES: [LowercaseAlias; 85] = [
    LowercaseAlias::new('\u{AB70}', '\u{13A0}'), // ꭰ -> Ꭰ
    LowercaseAlias::new('\u{AB71}', '\u{13A1}'), // ꭱ -> Ꭱ
    LowercaseAlias::new('\u{AB72}', '\u{13A2}'), // ꭲ -> Ꭲ
    LowercaseAlias::new('\u{AB73}', '\u{13A3}'), // ꭳ -> Ꭳ
    LowercaseAlias::new('\u{AB74}', '\u{13A4}'), // ꭴ -> Ꭴ
    LowercaseAlias::new('\u{AB75}', '\u{13A5}'), // ꭵ -> Ꭵ
    LowercaseAlias::new('\u{AB76}', '\u{13A6}'), // ꭶ -> Ꭶ
    LowercaseAlias::new('\u{AB77}', '\u{13A7}'), // ꭷ -> Ꭷ
    LowercaseAlias::new('\u{AB78}', '\u{13A8}'), // ꭸ -> Ꭸ
    LowercaseAlias::new('\u{AB79}', '\u{13A9}'), // ꭹ -> Ꭹ
    LowercaseAlias::new('\u{AB7A}', '\u{13AA}'), // ꭺ -> Ꭺ
    LowercaseAlias::new('\u{AB7B}', '\u{13AB}'), // ꭻ -> Ꭻ
    LowercaseAlias::new('\u{AB7C}', '\u{13AC}'), // ꭼ -> Ꭼ
    LowercaseAlias::new('\u{AB7D}', '\u{13AD}'), // ꭽ -> Ꭽ
    LowercaseAlias::new('\u{AB7E}', '\u{13AE}'), // ꭾ -> Ꭾ
    LowercaseAlias::new('\u{AB7F}', '\u{13AF}'), // ꭿ -> Ꭿ
    LowercaseAlias::new('\u{AB80}', '\u{13B0}'), // ꮀ -> Ꮀ
    LowercaseAlias::new('\u{AB81}', '\u{13B1}'), // ꮁ -> Ꮁ
    LowercaseAlias::new('\u{AB82}', '\u{13B2}'), // ꮂ -> Ꮂ
    LowercaseAlias::new('\u{AB83}', '\u{13B3}'), // ꮃ -> Ꮃ
    LowercaseAlias::new('\u{AB84}', '\u{13B4}'), // ꮄ -> Ꮄ
    LowercaseAlias::new('\u{AB85}', '\u{13B5}'), // ꮅ -> Ꮅ
    LowercaseAlias::new('\u{AB86}', '\u{13B6}'), // ꮆ -> Ꮆ
    LowercaseAlias::new('\u{AB87}', '\u{13B7}'), // ꮇ -> Ꮇ
    LowercaseAlias::new('\u{AB88}', '\u{13B8}'), // ꮈ -> Ꮈ
    LowercaseAlias::new('\u{AB89}', '\u{13B9}'), // ꮉ -> Ꮉ
    LowercaseAlias::new('\u{AB8A}', '\u{13BA}'), // ꮊ -> Ꮊ
    LowercaseAlias::new('\u{AB8B}', '\u{13BB}'), // ꮋ -> Ꮋ
    LowercaseAlias::new('\u{AB8C}', '\u{13BC}'), // ꮌ -> Ꮌ
    LowercaseAlias::new('\u{AB8D}', '\u{13BD}'), // ꮍ -> Ꮍ
    LowercaseAlias::new('\u{AB8E}', '\u{13BE}'), // ꮎ -> Ꮎ
    LowercaseAlias::new('\u{AB8F}', '\u{13BF}'), // ꮏ -> Ꮏ
    LowercaseAlias::new('\u{AB90}', '\u{13C0}'), // ꮐ -> Ꮐ
    LowercaseAlias::new('\u{AB91}', '\u{13C1}'), // ꮑ -> Ꮑ
    LowercaseAlias::new('\u{AB92}', '\u{13C2}'), // ꮒ -> Ꮒ
    LowercaseAlias::new('\u{AB93}', '\u{13C3}'), // ꮓ -> Ꮓ
    LowercaseAlias::new('\u{AB94}', '\u{13C4}'), // ꮔ -> Ꮔ
    LowercaseAlias::new('\u{AB95}', '\u{13C5}'), // ꮕ -> Ꮕ
    LowercaseAlias::new('\u{AB96}', '\u{13C6}'), // ꮖ -> Ꮖ
    LowercaseAlias::new('\u{AB97}', '\u{13C7}'), // ꮗ -> Ꮗ
    LowercaseAlias::new('\u{AB98}', '\u{13C8}'), // ꮘ -> Ꮘ
    LowercaseAlias::new('\u{AB99}', '\u{13C9}'), // ꮙ -> Ꮙ
    LowercaseAlias::new('\u{AB9A}', '\u{13CA}'), // ꮚ -> Ꮚ
    LowercaseAlias::new('\u{AB9B}', '\u{13CB}'), // ꮛ -> Ꮛ
    LowercaseAlias::new('\u{AB9C}', '\u{13CC}'), // ꮜ -> Ꮜ
    LowercaseAlias::new('\u{AB9D}', '\u{13CD}'), // ꮝ -> Ꮝ
    LowercaseAlias::new('\u{AB9E}', '\u{13CE}'), // ꮞ -> Ꮞ
    LowercaseAlias::new('\u{AB9F}', '\u{13CF}'), // ꮟ -> Ꮟ
    LowercaseAlias::new('\u{ABA0}', '\u{13D0}'), // ꮠ -> Ꮠ
    LowercaseAlias::new('\u{ABA1}', '\u{13D1}'), // ꮡ -> Ꮡ
    LowercaseAlias::new('\u{ABA2}', '\u{13D2}'), // ꮢ -> Ꮢ
    LowercaseAlias::new('\u{ABA3}', '\u{13D3}'), // ꮣ -> Ꮣ
    LowercaseAlias::new('\u{ABA4}', '\u{13D4}'), // ꮤ -> Ꮤ
    LowercaseAlias::new('\u{ABA5}', '\u{13D5}'), // ꮥ -> Ꮥ
    LowercaseAlias::new('\u{ABA6}', '\u{13D6}'), // ꮦ -> Ꮦ
    LowercaseAlias::new('\u{ABA7}', '\u{13D7}'), // ꮧ -> Ꮧ
    LowercaseAlias::new('\u{ABA8}', '\u{13D8}'), // ꮨ -> Ꮨ
    LowercaseAlias::new('\u{ABA9}', '\u{13D9}'), // ꮩ -> Ꮩ
    LowercaseAlias::new('\u{ABAA}', '\u{13DA}'), // ꮪ -> Ꮪ
    LowercaseAlias::new('\u{ABAB}', '\u{13DB}'), // ꮫ -> Ꮫ
    LowercaseAlias::new('\u{ABAC}', '\u{13DC}'), // ꮬ -> Ꮬ
    LowercaseAlias::new('\u{ABAD}', '\u{13DD}'), // ꮭ -> Ꮭ
    LowercaseAlias::new('\u{ABAE}', '\u{13DE}'), // ꮮ -> Ꮮ
    LowercaseAlias::new('\u{ABAF}', '\u{13DF}'), // ꮯ -> Ꮯ
    LowercaseAlias::new('\u{ABB0}', '\u{13E0}'), // ꮰ -> Ꮰ
    LowercaseAlias::new('\u{ABB1}', '\u{13E1}'), // ꮱ -> Ꮱ
    LowercaseAlias::new('\u{ABB2}', '\u{13E2}'), // ꮲ -> Ꮲ
    LowercaseAlias::new('\u{ABB3}', '\u{13E3}'), // ꮳ -> Ꮳ
    LowercaseAlias::new('\u{ABB4}', '\u{13E4}'), // ꮴ -> Ꮴ
    LowercaseAlias::new('\u{ABB5}', '\u{13E5}'), // ꮵ -> Ꮵ
    LowercaseAlias::new('\u{ABB6}', '\u{13E6}'), // ꮶ -> Ꮶ
    LowercaseAlias::new('\u{ABB7}', '\u{13E7}'), // ꮷ -> Ꮷ
    LowercaseAlias::new('\u{ABB8}', '\u{13E8}'), // ꮸ -> Ꮸ
    LowercaseAlias::new('\u{ABB9}', '\u{13E9}'), // ꮹ -> Ꮹ
    LowercaseAlias::new('\u{ABBA}', '\u{13EA}'), // ꮺ -> Ꮺ
    LowercaseAlias::new('\u{ABBB}', '\u{13EB}'), // ꮻ -> Ꮻ
    LowercaseAlias::new('\u{ABBC}', '\u{13EC}'), // ꮼ -> Ꮼ
    LowercaseAlias::new('\u{ABBD}', '\u{13ED}'), // ꮽ -> Ꮽ
    LowercaseAlias::new('\u{ABBE}', '\u{13EE}'), // ꮾ -> Ꮾ
    LowercaseAlias::new('\u{ABBF}', '\u{13EF}'), // ꮿ -> Ꮿ
    LowercaseAlias::new('\u{13F8}', '\u{13F0}'), // ᏸ -> Ᏸ
    LowercaseAlias::new('\u{13F9}', '\u{13F1}'), // ᏹ -> Ᏹ
    LowercaseAlias::new('\u{13FA}', '\u{13F2}'), // ᏺ -> Ᏺ
    LowercaseAlias::new('\u{13FB}', '\u{13F3}'), // ᏻ -> Ᏻ
    LowercaseAlias::new('\u{13FC}', '\u{13F4}'), // ᏼ -> Ᏼ
];
