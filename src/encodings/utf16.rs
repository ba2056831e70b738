// encodings/utf16.rs - UTF-16 tier membership and code units.

use smallvec::SmallVec;

/// A glyph is in the UTF-16 tier when at least one codepoint lies outside
/// the Basic Multilingual Plane and needs a surrogate pair.
pub fn is_utf16(glyph: &str) -> bool {
    glyph.chars().any(|c| c as u32 > 0xFFFF)
}

/// UTF-16 code units of a single character, widened to `u32`.
pub fn code_units(ch: char) -> SmallVec<[u32; 4]> {
    let mut buf = [0u16; 2];
    ch.encode_utf16(&mut buf)
        .iter()
        .map(|&unit| u32::from(unit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplementary_members() {
        assert!(is_utf16("🍗"));
        assert!(is_utf16("𝄞"));
        assert!(is_utf16("🜀"));
    }

    #[test]
    fn bmp_input_is_not_utf16() {
        assert!(!is_utf16("A"));
        assert!(!is_utf16("ß"));
        assert!(!is_utf16("ᚠ"));
        assert!(!is_utf16(""));
    }

    #[test]
    fn surrogate_pairs() {
        assert_eq!(code_units('🍗').as_slice(), &[0xD83C, 0xDF57]);
        assert_eq!(code_units('𝄞').as_slice(), &[0xD834, 0xDD1E]);
        assert_eq!(code_units('ß').as_slice(), &[0x00DF]);
    }
}
