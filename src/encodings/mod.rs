// encodings/mod.rs - Encoding tier classification.
//
// Classifies a glyph into the most specific of the ASCII / UTF-8 / UTF-16 /
// UTF-32 tiers and enumerates its code units per tier. The four membership
// tests are independent: a tier is tested, never assumed from another.

pub mod ascii;
pub mod utf16;
pub mod utf32;
pub mod utf8;

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::error::RunaError;

bitflags! {
    /// Set of encoding tiers a glyph satisfies.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EncodingSupport: u8 {
        const ASCII = 1 << 0;
        const UTF8 = 1 << 1;
        const UTF16 = 1 << 2;
        const UTF32 = 1 << 3;
    }
}

impl EncodingSupport {
    /// Run all four membership tests against `glyph`.
    pub fn of(glyph: &str) -> EncodingSupport {
        let mut support = EncodingSupport::empty();
        if ascii::is_ascii(glyph) {
            support |= EncodingSupport::ASCII;
        }
        if utf8::is_utf8(glyph) {
            support |= EncodingSupport::UTF8;
        }
        if utf16::is_utf16(glyph) {
            support |= EncodingSupport::UTF16;
        }
        if utf32::is_utf32(glyph) {
            support |= EncodingSupport::UTF32;
        }
        support
    }
}

/// An encoding tier. `detect` always resolves to the most specific
/// applicable tier, never just the first passing test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Ascii,
    Utf8,
    Utf16,
    Utf32,
}

impl Encoding {
    /// Resolve the most specific tier for `glyph`.
    ///
    /// UTF-16 surrogate-pair characters also pass the UTF-8 test, so the
    /// resolution works through the full truth table rather than stopping
    /// at the first passing tier. The UTF-32 test never decides on its own:
    /// every Unicode scalar is UTF-32 representable.
    ///
    /// # Examples
    ///
    /// ```
    /// use runa::encodings::Encoding;
    ///
    /// assert_eq!(Encoding::detect("A").unwrap(), Encoding::Ascii);
    /// assert_eq!(Encoding::detect("ß").unwrap(), Encoding::Utf8);
    /// assert_eq!(Encoding::detect("🍗").unwrap(), Encoding::Utf16);
    /// ```
    pub fn detect(glyph: &str) -> Result<Encoding, RunaError> {
        let support = EncodingSupport::of(glyph);
        let is_ascii = support.contains(EncodingSupport::ASCII);
        let is_utf8 = support.contains(EncodingSupport::UTF8);
        let is_utf16 = support.contains(EncodingSupport::UTF16);

        if is_ascii && !is_utf8 {
            Ok(Encoding::Ascii)
        } else if (is_ascii && is_utf8) || (!is_ascii && is_utf8 && !is_utf16) {
            Ok(Encoding::Utf8)
        } else if (is_utf8 && is_utf16) || (!is_utf8 && is_utf16) {
            Ok(Encoding::Utf16)
        } else {
            Err(RunaError::UnsupportedEncoding {
                glyph: glyph.to_owned(),
            })
        }
    }

    /// Encoding name as used in the character snapshot.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Ascii => "ASCII",
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16 => "UTF-16",
            Encoding::Utf32 => "UTF-32",
        }
    }

    /// Width of one code unit, in hex digits.
    pub fn unit_hex_width(self) -> usize {
        match self {
            Encoding::Ascii | Encoding::Utf8 => 2,
            Encoding::Utf16 => 4,
            Encoding::Utf32 => 8,
        }
    }

    /// Maximum code units a single character may occupy in this tier.
    /// UTF-16 admits up to four: the reinterpreted unit count of a
    /// surrogate-pair character's byte form.
    pub fn max_units(self) -> usize {
        match self {
            Encoding::Ascii | Encoding::Utf8 | Encoding::Utf32 => 1,
            Encoding::Utf16 => 4,
        }
    }

    /// Number of code units `glyph` occupies in this tier.
    pub fn unit_count(self, glyph: &str) -> usize {
        match self {
            Encoding::Ascii => glyph.len(),
            Encoding::Utf8 | Encoding::Utf32 => glyph.chars().count(),
            Encoding::Utf16 => glyph.encode_utf16().count(),
        }
    }

    /// Code units of a single character in this tier, widened to `u32`.
    pub fn code_units(self, ch: char) -> SmallVec<[u32; 4]> {
        match self {
            Encoding::Ascii => SmallVec::from_slice(&[ch as u32]),
            Encoding::Utf8 => utf8::code_units(ch),
            Encoding::Utf16 => utf16::code_units(ch),
            Encoding::Utf32 => utf32::code_units(ch),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_flags_ascii() {
        let support = EncodingSupport::of("A");
        assert!(support.contains(EncodingSupport::ASCII));
        assert!(!support.contains(EncodingSupport::UTF8));
        assert!(!support.contains(EncodingSupport::UTF16));
        assert!(support.contains(EncodingSupport::UTF32));
    }

    #[test]
    fn support_flags_multibyte() {
        let support = EncodingSupport::of("ß");
        assert!(!support.contains(EncodingSupport::ASCII));
        assert!(support.contains(EncodingSupport::UTF8));
        assert!(!support.contains(EncodingSupport::UTF16));
    }

    #[test]
    fn support_flags_supplementary() {
        let support = EncodingSupport::of("🍗");
        assert!(!support.contains(EncodingSupport::ASCII));
        assert!(support.contains(EncodingSupport::UTF8));
        assert!(support.contains(EncodingSupport::UTF16));
        assert!(support.contains(EncodingSupport::UTF32));
    }

    #[test]
    fn detect_resolves_most_specific_tier() {
        assert_eq!(Encoding::detect("A").unwrap(), Encoding::Ascii);
        assert_eq!(Encoding::detect(" ").unwrap(), Encoding::Ascii);
        assert_eq!(Encoding::detect("ß").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::detect("ᚠ").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::detect("🍗").unwrap(), Encoding::Utf16);
        assert_eq!(Encoding::detect("𝄞").unwrap(), Encoding::Utf16);
    }

    #[test]
    fn detect_is_exhaustive_over_scalars() {
        // Spot-check one codepoint per region of the truth table.
        for (glyph, expected) in [
            ("\u{0000}", Encoding::Ascii),
            ("\u{007F}", Encoding::Ascii),
            ("\u{0080}", Encoding::Utf8),
            ("\u{FFFD}", Encoding::Utf8),
            ("\u{10000}", Encoding::Utf16),
            ("\u{10FFFF}", Encoding::Utf16),
        ] {
            assert_eq!(Encoding::detect(glyph).unwrap(), expected, "{:?}", glyph);
        }
    }

    #[test]
    fn unit_counts() {
        assert_eq!(Encoding::Ascii.unit_count("asdf"), 4);
        assert_eq!(Encoding::Utf8.unit_count("ß"), 1);
        assert_eq!(Encoding::Utf16.unit_count("🍗"), 2);
        assert_eq!(Encoding::Utf16.unit_count("🍗🍗🍗"), 6);
        assert_eq!(Encoding::Ascii.unit_count(""), 0);
    }

    #[test]
    fn code_units_per_tier() {
        assert_eq!(Encoding::Utf8.code_units('🍗').as_slice(), &[0xF0, 0x9F, 0x8D, 0x97]);
        assert_eq!(Encoding::Utf16.code_units('🍗').as_slice(), &[0xD83C, 0xDF57]);
        assert_eq!(Encoding::Utf32.code_units('🍗').as_slice(), &[0x1F357]);
        assert_eq!(Encoding::Ascii.code_units('A').as_slice(), &[0x41]);
    }

    #[test]
    fn display_names() {
        assert_eq!(Encoding::Ascii.to_string(), "ASCII");
        assert_eq!(Encoding::Utf16.to_string(), "UTF-16");
    }
}
