// character.rs - Single-character inspection.
//
// A `Character` wraps one codepoint in canonical composition form and
// carries everything the UCD knows about it plus its encoding-tier
// classification. Construction either fully succeeds or fails; a
// constructed value is immutable and fully determined by its glyph.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{json, Value};

use crate::encodings::{Encoding, EncodingSupport};
use crate::error::RunaError;
use crate::script;
use crate::unicode::{control_code_name, PropertySource, UCD};

/// An inspected single-codepoint character.
///
/// # Examples
///
/// ```
/// use runa::character::Character;
///
/// let ch = Character::new("A").unwrap();
/// assert_eq!(ch.to_codepoint(), "U+0041");
/// assert_eq!(ch.to_decimal(), 65);
/// assert_eq!(ch.name(), "LATIN CAPITAL LETTER A");
/// assert_eq!(ch.script(), Some("Latin"));
/// assert!(ch.is_ascii());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    glyph: String,
    ch: char,
    encoding: Encoding,
    support: EncodingSupport,
    category: &'static str,
    bidirectional_class: &'static str,
    combining_class: u8,
    block: Option<&'static str>,
    is_mirrored: bool,
    name: String,
    unicode_version: String,
    script: Option<&'static str>,
}

impl Character {
    /// Inspect a single character using the default property source.
    ///
    /// The input is NFC-normalized first, so decomposed sequences that
    /// compose to one codepoint are accepted:
    ///
    /// ```
    /// use runa::character::Character;
    ///
    /// let ch = Character::new("e\u{0301}").unwrap();
    /// assert_eq!(ch.glyph(), "é");
    /// assert_eq!(ch.length(), 1);
    /// ```
    pub fn new(character: &str) -> Result<Character, RunaError> {
        Character::with_source(character, &UCD)
    }

    /// Inspect a single character against a caller-supplied property source.
    pub fn with_source(
        character: &str,
        source: &dyn PropertySource,
    ) -> Result<Character, RunaError> {
        let glyph = source.normalize(character);
        let encoding = Encoding::detect(&glyph)?;
        let support = EncodingSupport::of(&glyph);

        let units = encoding.unit_count(&glyph);
        let max = encoding.max_units();
        if units == 0 || units > max {
            return Err(RunaError::InvalidLength {
                received: units,
                max,
            });
        }

        let mut chars = glyph.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => {
                return Err(RunaError::InvalidLength {
                    received: glyph.chars().count(),
                    max: 1,
                })
            }
        };

        // Category resolves before the name so the control-code fallback
        // below can consult it.
        let category = source.category_of(ch);
        let name = match source.name_of(ch) {
            Some(name) => name,
            None if category == "Cc" => control_code_name(ch).unwrap_or("").to_owned(),
            None => String::new(),
        };
        let unicode_version = match source.age_of(ch) {
            Some((major, minor, micro)) => format!("{}.{}.{}", major, minor, micro),
            None => String::from("0.0.0"),
        };

        Ok(Character {
            ch,
            encoding,
            support,
            category,
            bidirectional_class: source.bidi_class_of(ch),
            combining_class: source.combining_class_of(ch),
            block: source.block_of(ch),
            is_mirrored: source.is_mirrored(ch),
            name,
            unicode_version,
            script: script::first_match(ch, source),
            glyph,
        })
    }

    // === Accessors ===

    /// The normalized glyph.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// The glyph as a `char`.
    pub fn as_char(&self) -> char {
        self.ch
    }

    /// The detected encoding tier.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// All encoding tiers the glyph satisfies.
    pub fn encoding_support(&self) -> EncodingSupport {
        self.support
    }

    /// Whether the glyph fits the ASCII tier.
    pub fn is_ascii(&self) -> bool {
        self.support.contains(EncodingSupport::ASCII)
    }

    /// Whether the glyph requires a multi-byte UTF-8 sequence.
    pub fn is_utf8(&self) -> bool {
        self.support.contains(EncodingSupport::UTF8)
    }

    /// Whether the glyph requires a UTF-16 surrogate pair.
    pub fn is_utf16(&self) -> bool {
        self.support.contains(EncodingSupport::UTF16)
    }

    /// Whether the glyph is UTF-32 representable (every scalar is).
    pub fn is_utf32(&self) -> bool {
        self.support.contains(EncodingSupport::UTF32)
    }

    /// Byte size of the glyph, 1 through 4. At most 1 for ASCII.
    pub fn size(&self) -> usize {
        self.glyph.len()
    }

    /// Codepoint count of the glyph. Always 1 for a constructed value.
    pub fn length(&self) -> usize {
        self.glyph.chars().count()
    }

    /// Two-letter general category abbreviation.
    pub fn category(&self) -> &'static str {
        self.category
    }

    /// Bidirectional class abbreviation.
    pub fn bidirectional_class(&self) -> &'static str {
        self.bidirectional_class
    }

    /// Canonical combining class.
    pub fn combining_class(&self) -> u8 {
        self.combining_class
    }

    /// Block the codepoint is allocated in, if assigned.
    pub fn block(&self) -> Option<&'static str> {
        self.block
    }

    /// Whether the codepoint has the `Bidi_Mirrored` property.
    pub fn is_mirrored(&self) -> bool {
        self.is_mirrored
    }

    /// Canonical name, or the abbreviated control-code name for the C0
    /// controls and DEL. Empty for unnamed codepoints.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unicode version that introduced the codepoint, `major.minor.micro`.
    pub fn unicode_version(&self) -> &str {
        &self.unicode_version
    }

    /// First supported script whose rule the glyph satisfies.
    pub fn script(&self) -> Option<&'static str> {
        self.script
    }

    // === Conversions ===

    /// Hex rendering of the glyph's UTF-8 bytes, two digits per byte.
    pub fn to_hex(&self) -> String {
        self.glyph
            .bytes()
            .map(|byte| format!("{:02x}", byte))
            .collect()
    }

    /// Binary rendering of [`to_decimal`](Character::to_decimal), without
    /// leading zeros.
    pub fn to_binary(&self) -> String {
        format!("{:b}", self.to_decimal())
    }

    /// The glyph's UTF-8 bytes read as one big-endian integer.
    ///
    /// ```
    /// use runa::character::Character;
    ///
    /// assert_eq!(Character::new("A").unwrap().to_decimal(), 65);
    /// assert_eq!(Character::new("🍗").unwrap().to_decimal(), 4036988311);
    /// ```
    pub fn to_decimal(&self) -> u32 {
        self.glyph
            .bytes()
            .fold(0u32, |acc, byte| (acc << 8) | u32::from(byte))
    }

    /// The codepoint in `U+` notation, zero-padded uppercase hex.
    pub fn to_codepoint(&self) -> String {
        format!("U+{:04X}", self.ch as u32)
    }

    /// The glyph's UTF-8 code units, space-separated.
    ///
    /// Each unit renders as `0x`-prefixed zero-padded uppercase hex, or as
    /// its decimal value when `as_integer` is set.
    pub fn to_utf8(&self, as_integer: bool) -> String {
        self.convert(Encoding::Utf8, as_integer)
    }

    /// The glyph's UTF-16 code units, space-separated.
    ///
    /// ```
    /// use runa::character::Character;
    ///
    /// let ch = Character::new("🍗").unwrap();
    /// assert_eq!(ch.to_utf16(false), "0xD83C 0xDF57");
    /// assert_eq!(ch.to_utf16(true), "55356 57175");
    /// ```
    pub fn to_utf16(&self, as_integer: bool) -> String {
        self.convert(Encoding::Utf16, as_integer)
    }

    /// The glyph's UTF-32 code unit.
    pub fn to_utf32(&self, as_integer: bool) -> String {
        self.convert(Encoding::Utf32, as_integer)
    }

    fn convert(&self, target: Encoding, as_integer: bool) -> String {
        let width = target.unit_hex_width();
        let units = target.code_units(self.ch);
        units
            .iter()
            .map(|unit| {
                if as_integer {
                    unit.to_string()
                } else {
                    format!("0x{:0width$X}", unit, width = width)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Sorted key/value snapshot of every property and rendering.
    pub fn to_array(&self) -> BTreeMap<&'static str, Value> {
        let mut data = BTreeMap::new();
        data.insert("bidirectional_class", json!(self.bidirectional_class));
        data.insert("binary", json!(self.to_binary()));
        data.insert("block", self.block.map_or(Value::Null, |block| json!(block)));
        data.insert("bytes", json!(self.size()));
        data.insert("category", json!(self.category));
        data.insert("codepoint", json!(self.to_codepoint()));
        data.insert("combining_class", json!(self.combining_class));
        data.insert("decimal", json!(self.to_decimal()));
        data.insert("encoding", json!(self.encoding.name()));
        data.insert("glyph", json!(self.glyph));
        data.insert("hex", json!(self.to_hex()));
        data.insert("is_mirrored", json!(self.is_mirrored));
        data.insert("name", json!(self.name));
        data.insert(
            "script",
            self.script.map_or(Value::Null, |script| json!(script)),
        );
        data.insert("unicode_version", json!(self.unicode_version));
        data.insert("utf16", json!(self.to_utf16(false)));
        data.insert("utf32", json!(self.to_utf32(false)));
        data.insert("utf8", json!(self.to_utf8(false)));
        data
    }

    /// The snapshot as a JSON document with sorted keys.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.to_array()).expect("snapshot keys and values always serialize")
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glyph)
    }
}
