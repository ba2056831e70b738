// encodings/utf32.rs - UTF-32 tier membership and code units.

use smallvec::SmallVec;

/// Every Unicode scalar fits in one UTF-32 unit, so every glyph passes.
/// The test exists for symmetry with the other tiers; detection resolves
/// a more specific tier first in all cases.
pub fn is_utf32(_glyph: &str) -> bool {
    true
}

/// The UTF-32 code unit of a single character.
pub fn code_units(ch: char) -> SmallVec<[u32; 4]> {
    SmallVec::from_slice(&[ch as u32])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scalar_is_representable() {
        assert!(is_utf32("A"));
        assert!(is_utf32("🍗"));
        assert!(is_utf32(""));
    }

    #[test]
    fn single_unit() {
        assert_eq!(code_units('A').as_slice(), &[0x41]);
        assert_eq!(code_units('🍗').as_slice(), &[0x1F357]);
    }
}
