// unicode/mirrored.rs - Bidi_Mirrored codepoint ranges.
//
// Inclusive [start, end] pairs, sorted by start, extracted from
// UnicodeData.txt (Bidi_Mirrored = Y): paired punctuation plus the
// mathematical operator and bracket ranges.

/// Sorted, inclusive codepoint ranges with `Bidi_Mirrored = Y`.
static BIDI_MIRRORED_RANGES: [[u32; 2]; 62] = [
    [0x0028, 0x0029], // ( )
    [0x003C, 0x003C], // <
    [0x003E, 0x003E], // >
    [0x005B, 0x005B], // [
    [0x005D, 0x005D], // ]
    [0x007B, 0x007B], // {
    [0x007D, 0x007D], // }
    [0x00AB, 0x00AB], // «
    [0x00BB, 0x00BB], // »
    [0x0F3A, 0x0F3D], // Tibetan brackets
    [0x169B, 0x169C], // Ogham feather marks
    [0x2039, 0x203A], // single guillemets
    [0x2045, 0x2046], // square brackets with quill
    [0x207D, 0x207E], // superscript parentheses
    [0x208D, 0x208E], // subscript parentheses
    [0x2140, 0x2140], // double-struck n-ary summation
    [0x2201, 0x2204], // complement .. there does not exist
    [0x2208, 0x220D], // element-of family
    [0x2211, 0x2211], // n-ary summation
    [0x2215, 0x2216], // division slash, set minus
    [0x221A, 0x221D], // radicals, proportional to
    [0x221F, 0x2222], // angles
    [0x2224, 0x2224], // does not divide
    [0x2226, 0x2226], // not parallel to
    [0x222B, 0x2233], // integrals
    [0x2239, 0x2239], // excess
    [0x223B, 0x224C], // tilde relations
    [0x2252, 0x2255], // image-of / approaches relations
    [0x225F, 0x2260], // questioned equal, not equal
    [0x2262, 0x2262], // not identical to
    [0x2264, 0x226B], // inequalities
    [0x226E, 0x228C], // negated relations, subsets
    [0x228F, 0x2292], // square subsets
    [0x2298, 0x2298], // circled division slash
    [0x22A2, 0x22A3], // turnstiles
    [0x22A6, 0x22B8], // assertions, normal subgroups, multimap
    [0x22BE, 0x22BF], // right angle with arc, right triangle
    [0x22C9, 0x22CD], // semidirect products
    [0x22D0, 0x22D1], // double subsets
    [0x22D6, 0x22ED], // less-than with dot family
    [0x22F0, 0x22FF], // diagonal ellipses, element-of variants
    [0x2308, 0x230B], // ceilings and floors
    [0x2320, 0x2321], // integral halves
    [0x2329, 0x232A], // angle brackets
    [0x2768, 0x2775], // ornamental parentheses
    [0x27E6, 0x27EF], // mathematical white brackets
    [0x2983, 0x2998], // bracket pile
    [0x29FC, 0x29FD], // curved angle brackets
    [0x2E02, 0x2E05], // substitution brackets
    [0x2E09, 0x2E0A], // transposition brackets
    [0x2E0C, 0x2E0D], // raised omission brackets
    [0x2E1C, 0x2E1D], // low paraphrase brackets
    [0x3008, 0x3011], // CJK angle and corner brackets
    [0x3014, 0x301B], // CJK tortoise shell and lenticular brackets
    [0xFF08, 0xFF09], // fullwidth parentheses
    [0xFF1C, 0xFF1C], // fullwidth less-than
    [0xFF1E, 0xFF1E], // fullwidth greater-than
    [0xFF3B, 0xFF3B], // fullwidth left square bracket
    [0xFF3D, 0xFF3D], // fullwidth right square bracket
    [0xFF5B, 0xFF5B], // fullwidth left curly bracket
    [0xFF5D, 0xFF5D], // fullwidth right curly bracket
    [0xFF5F, 0xFF63], // white parentheses, halfwidth corner brackets
];

/// Whether the codepoint has the `Bidi_Mirrored` property.
pub fn is_bidi_mirrored(ch: char) -> bool {
    // Binary search over range pairs, same shape as the classic
    // is-code-in-ctype lookup.
    let code = ch as u32;
    let ranges = &BIDI_MIRRORED_RANGES;
    let n = ranges.len();
    let mut low = 0usize;
    let mut high = n;
    while low < high {
        let mid = (low + high) / 2;
        if code > ranges[mid][1] {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low < n && code >= ranges[low][0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_pairs_are_mirrored() {
        for ch in ['(', ')', '<', '>', '[', ']', '{', '}'] {
            assert!(is_bidi_mirrored(ch), "{:?}", ch);
        }
    }

    #[test]
    fn math_operators_are_mirrored() {
        assert!(is_bidi_mirrored('∈')); // U+2208
        assert!(is_bidi_mirrored('∑')); // U+2211
        assert!(is_bidi_mirrored('⌈')); // U+2308
        assert!(is_bidi_mirrored('«'));
    }

    #[test]
    fn fullwidth_forms() {
        assert!(is_bidi_mirrored('（')); // U+FF08
        assert!(is_bidi_mirrored('｝')); // U+FF5D
        assert!(!is_bidi_mirrored('Ａ')); // U+FF21
        assert!(!is_bidi_mirrored('！')); // U+FF01
    }

    #[test]
    fn unmirrored_characters() {
        for ch in ['A', 'a', '1', '+', '=', '!', '"', 'ß', '🍗'] {
            assert!(!is_bidi_mirrored(ch), "{:?}", ch);
        }
    }

    #[test]
    fn ranges_are_sorted_and_disjoint() {
        for pair in BIDI_MIRRORED_RANGES.windows(2) {
            assert!(pair[0][1] < pair[1][0]);
        }
        for range in &BIDI_MIRRORED_RANGES {
            assert!(range[0] <= range[1]);
        }
    }
}
