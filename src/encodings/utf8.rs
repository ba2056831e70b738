// encodings/utf8.rs - UTF-8 tier membership and code units.

use smallvec::SmallVec;

/// A glyph is in the UTF-8 tier when at least one codepoint requires a
/// multi-byte UTF-8 sequence. Pure seven-bit input belongs to the ASCII
/// tier instead.
pub fn is_utf8(glyph: &str) -> bool {
    glyph.chars().any(|c| c as u32 > 0x7F)
}

/// UTF-8 code units (bytes) of a single character, widened to `u32`.
pub fn code_units(ch: char) -> SmallVec<[u32; 4]> {
    let mut buf = [0u8; 4];
    ch.encode_utf8(&mut buf)
        .bytes()
        .map(u32::from)
        .collect()
}
