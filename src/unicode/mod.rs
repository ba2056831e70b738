// unicode/mod.rs - Unicode character database access.
//
// Everything the inspector needs from the UCD sits behind the
// `PropertySource` capability trait; `UCD` is the default source, backed
// by the unicode-rs / UNIC property crates. Callers never depend on the
// backing mechanism, only on the trait.

mod mirrored;

use unic_ucd_age::Age;
use unic_ucd_block::Block;
use unic_ucd_name::Name;
use unicode_bidi::{bidi_class, BidiClass};
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;
use unicode_script::{Script, UnicodeScript};

pub use mirrored::is_bidi_mirrored;

/// Capability interface over the Unicode character database.
///
/// All lookups are pure reads over immutable data; a source is safe to
/// share between any number of concurrent inspections.
pub trait PropertySource {
    /// Two-letter general category abbreviation (`Lu`, `Nd`, `Po`, ...).
    fn category_of(&self, ch: char) -> &'static str;
    /// Bidirectional class abbreviation (`L`, `R`, `EN`, ...).
    fn bidi_class_of(&self, ch: char) -> &'static str;
    /// Canonical combining class (0 for starters).
    fn combining_class_of(&self, ch: char) -> u8;
    /// Name of the block the codepoint is allocated in, if assigned.
    fn block_of(&self, ch: char) -> Option<&'static str>;
    /// Whether the codepoint has the `Bidi_Mirrored` property.
    fn is_mirrored(&self, ch: char) -> bool;
    /// Canonical character name, if the codepoint has one.
    fn name_of(&self, ch: char) -> Option<String>;
    /// Unicode version that introduced the codepoint, as
    /// `(major, minor, micro)`, if assigned.
    fn age_of(&self, ch: char) -> Option<(u16, u16, u16)>;
    /// Whether the codepoint is a member of the named script.
    /// Unknown names are simply not a member of anything.
    fn is_in_script(&self, ch: char, script: &str) -> bool;
    /// Canonical composition (NFC) of arbitrary input.
    fn normalize(&self, input: &str) -> String;
}

/// The default property source.
pub struct Ucd;

/// Shared read-only instance of the default source.
pub static UCD: Ucd = Ucd;

impl PropertySource for Ucd {
    fn category_of(&self, ch: char) -> &'static str {
        category_abbr(get_general_category(ch))
    }

    fn bidi_class_of(&self, ch: char) -> &'static str {
        bidi_abbr(bidi_class(ch))
    }

    fn combining_class_of(&self, ch: char) -> u8 {
        canonical_combining_class(ch)
    }

    fn block_of(&self, ch: char) -> Option<&'static str> {
        Block::of(ch).map(|block| block.name)
    }

    fn is_mirrored(&self, ch: char) -> bool {
        mirrored::is_bidi_mirrored(ch)
    }

    fn name_of(&self, ch: char) -> Option<String> {
        Name::of(ch).map(|name| name.to_string())
    }

    fn age_of(&self, ch: char) -> Option<(u16, u16, u16)> {
        Age::of(ch).map(|age| {
            let version = age.actual();
            (version.major, version.minor, version.micro)
        })
    }

    fn is_in_script(&self, ch: char, script: &str) -> bool {
        match script_property(script) {
            Some(property) => ch.script() == property,
            None => false,
        }
    }

    fn normalize(&self, input: &str) -> String {
        input.nfc().collect()
    }
}

// === Script property lookup ===

/// Script properties keyed by full name, sorted for binary search.
static SCRIPT_PROPERTIES: [(&str, Script); 44] = [
    ("Arabic", Script::Arabic),
    ("Armenian", Script::Armenian),
    ("Bengali", Script::Bengali),
    ("Bopomofo", Script::Bopomofo),
    ("Braille", Script::Braille),
    ("Buhid", Script::Buhid),
    ("Canadian_Aboriginal", Script::Canadian_Aboriginal),
    ("Cherokee", Script::Cherokee),
    ("Common", Script::Common),
    ("Cyrillic", Script::Cyrillic),
    ("Devanagari", Script::Devanagari),
    ("Ethiopic", Script::Ethiopic),
    ("Georgian", Script::Georgian),
    ("Greek", Script::Greek),
    ("Gujarati", Script::Gujarati),
    ("Gurmukhi", Script::Gurmukhi),
    ("Han", Script::Han),
    ("Hangul", Script::Hangul),
    ("Hanunoo", Script::Hanunoo),
    ("Hebrew", Script::Hebrew),
    ("Hiragana", Script::Hiragana),
    ("Inherited", Script::Inherited),
    ("Kannada", Script::Kannada),
    ("Katakana", Script::Katakana),
    ("Khmer", Script::Khmer),
    ("Lao", Script::Lao),
    ("Latin", Script::Latin),
    ("Limbu", Script::Limbu),
    ("Malayalam", Script::Malayalam),
    ("Mongolian", Script::Mongolian),
    ("Myanmar", Script::Myanmar),
    ("Ogham", Script::Ogham),
    ("Oriya", Script::Oriya),
    ("Runic", Script::Runic),
    ("Sinhala", Script::Sinhala),
    ("Syriac", Script::Syriac),
    ("Tagalog", Script::Tagalog),
    ("Tagbanwa", Script::Tagbanwa),
    ("Tamil", Script::Tamil),
    ("Telugu", Script::Telugu),
    ("Thaana", Script::Thaana),
    ("Thai", Script::Thai),
    ("Tibetan", Script::Tibetan),
    ("Yi", Script::Yi),
];

/// Resolve a script name to its property value. Binary search on the
/// sorted name table.
fn script_property(name: &str) -> Option<Script> {
    SCRIPT_PROPERTIES
        .binary_search_by_key(&name, |(entry, _)| *entry)
        .ok()
        .map(|index| SCRIPT_PROPERTIES[index].1)
}

// === Abbreviation tables ===

/// General category to its UCD two-letter abbreviation.
fn category_abbr(category: GeneralCategory) -> &'static str {
    match category {
        GeneralCategory::UppercaseLetter => "Lu",
        GeneralCategory::LowercaseLetter => "Ll",
        GeneralCategory::TitlecaseLetter => "Lt",
        GeneralCategory::ModifierLetter => "Lm",
        GeneralCategory::OtherLetter => "Lo",
        GeneralCategory::NonspacingMark => "Mn",
        GeneralCategory::SpacingMark => "Mc",
        GeneralCategory::EnclosingMark => "Me",
        GeneralCategory::DecimalNumber => "Nd",
        GeneralCategory::LetterNumber => "Nl",
        GeneralCategory::OtherNumber => "No",
        GeneralCategory::ConnectorPunctuation => "Pc",
        GeneralCategory::DashPunctuation => "Pd",
        GeneralCategory::OpenPunctuation => "Ps",
        GeneralCategory::ClosePunctuation => "Pe",
        GeneralCategory::InitialPunctuation => "Pi",
        GeneralCategory::FinalPunctuation => "Pf",
        GeneralCategory::OtherPunctuation => "Po",
        GeneralCategory::MathSymbol => "Sm",
        GeneralCategory::CurrencySymbol => "Sc",
        GeneralCategory::ModifierSymbol => "Sk",
        GeneralCategory::OtherSymbol => "So",
        GeneralCategory::SpaceSeparator => "Zs",
        GeneralCategory::LineSeparator => "Zl",
        GeneralCategory::ParagraphSeparator => "Zp",
        GeneralCategory::Control => "Cc",
        GeneralCategory::Format => "Cf",
        GeneralCategory::Surrogate => "Cs",
        GeneralCategory::PrivateUse => "Co",
        GeneralCategory::Unassigned => "Cn",
    }
}

/// Bidirectional class to its UCD abbreviation.
fn bidi_abbr(class: BidiClass) -> &'static str {
    match class {
        BidiClass::L => "L",
        BidiClass::R => "R",
        BidiClass::AL => "AL",
        BidiClass::EN => "EN",
        BidiClass::ES => "ES",
        BidiClass::ET => "ET",
        BidiClass::AN => "AN",
        BidiClass::CS => "CS",
        BidiClass::NSM => "NSM",
        BidiClass::BN => "BN",
        BidiClass::B => "B",
        BidiClass::S => "S",
        BidiClass::WS => "WS",
        BidiClass::ON => "ON",
        BidiClass::LRE => "LRE",
        BidiClass::LRO => "LRO",
        BidiClass::RLE => "RLE",
        BidiClass::RLO => "RLO",
        BidiClass::PDF => "PDF",
        BidiClass::LRI => "LRI",
        BidiClass::RLI => "RLI",
        BidiClass::FSI => "FSI",
        BidiClass::PDI => "PDI",
    }
}

// === Control code names ===

/// Abbreviated names for the C0 controls and DEL, which have no canonical
/// name in the UCD.
static CONTROL_CODE_NAMES: [(u32, &str); 33] = [
    (0x0000, "NUL"),
    (0x0001, "SOH"),
    (0x0002, "STX"),
    (0x0003, "ETX"),
    (0x0004, "EOT"),
    (0x0005, "ENQ"),
    (0x0006, "ACK"),
    (0x0007, "BEL"),
    (0x0008, "BS"),
    (0x0009, "HT"),
    (0x000A, "LF"),
    (0x000B, "VT"),
    (0x000C, "FF"),
    (0x000D, "CR"),
    (0x000E, "SO"),
    (0x000F, "SI"),
    (0x0010, "DLE"),
    (0x0011, "DC1"),
    (0x0012, "DC2"),
    (0x0013, "DC3"),
    (0x0014, "DC4"),
    (0x0015, "NAK"),
    (0x0016, "SYN"),
    (0x0017, "ETB"),
    (0x0018, "CAN"),
    (0x0019, "EM"),
    (0x001A, "SUB"),
    (0x001B, "ESC"),
    (0x001C, "FS"),
    (0x001D, "GS"),
    (0x001E, "RS"),
    (0x001F, "US"),
    (0x007F, "DEL"),
];

/// Abbreviated control-code name, if the codepoint is one.
pub fn control_code_name(ch: char) -> Option<&'static str> {
    CONTROL_CODE_NAMES
        .binary_search_by_key(&(ch as u32), |(code, _)| *code)
        .ok()
        .map(|index| CONTROL_CODE_NAMES[index].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(UCD.category_of('A'), "Lu");
        assert_eq!(UCD.category_of('a'), "Ll");
        assert_eq!(UCD.category_of('1'), "Nd");
        assert_eq!(UCD.category_of(' '), "Zs");
        assert_eq!(UCD.category_of('\u{0000}'), "Cc");
        assert_eq!(UCD.category_of('🍗'), "So");
    }

    #[test]
    fn bidi_classes() {
        assert_eq!(UCD.bidi_class_of('A'), "L");
        assert_eq!(UCD.bidi_class_of('1'), "EN");
        assert_eq!(UCD.bidi_class_of('א'), "R");
        assert_eq!(UCD.bidi_class_of('🍗'), "ON");
    }

    #[test]
    fn combining_classes() {
        assert_eq!(UCD.combining_class_of('A'), 0);
        assert_eq!(UCD.combining_class_of('\u{0301}'), 230);
    }

    #[test]
    fn blocks() {
        assert_eq!(UCD.block_of('A'), Some("Basic Latin"));
        assert_eq!(UCD.block_of('ᚠ'), Some("Runic"));
    }

    #[test]
    fn names() {
        assert_eq!(UCD.name_of('A').as_deref(), Some("LATIN CAPITAL LETTER A"));
        assert_eq!(UCD.name_of('🍗').as_deref(), Some("POULTRY LEG"));
        assert_eq!(UCD.name_of('\u{0000}'), None);
    }

    #[test]
    fn ages() {
        assert_eq!(UCD.age_of('A'), Some((1, 1, 0)));
        assert_eq!(UCD.age_of('🍗'), Some((6, 0, 0)));
    }

    #[test]
    fn script_membership() {
        assert!(UCD.is_in_script('a', "Latin"));
        assert!(UCD.is_in_script('а', "Cyrillic"));
        assert!(UCD.is_in_script('1', "Common"));
        assert!(!UCD.is_in_script('a', "Cyrillic"));
        assert!(!UCD.is_in_script('a', "Klingon"));
    }

    #[test]
    fn script_table_is_sorted() {
        for pair in SCRIPT_PROPERTIES.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn normalization_composes() {
        assert_eq!(UCD.normalize("e\u{0301}"), "é");
        assert_eq!(UCD.normalize("A"), "A");
    }

    #[test]
    fn control_names() {
        assert_eq!(control_code_name('\u{0000}'), Some("NUL"));
        assert_eq!(control_code_name('\n'), Some("LF"));
        assert_eq!(control_code_name('\u{007F}'), Some("DEL"));
        assert_eq!(control_code_name('A'), None);
    }

    #[test]
    fn mirrored_property() {
        assert!(UCD.is_mirrored('('));
        assert!(!UCD.is_mirrored('A'));
    }
}
