// script.rs - Script classification.
//
// Maintains the priority-ordered list of supported scripts and decides
// per-character membership. Common-script characters (digits, punctuation,
// whitespace) are compatible with every script, so each non-Common rule
// also admits Common members.

use crate::error::RunaError;
use crate::unicode::{PropertySource, UCD};

/// The script classification shared by every writing system.
pub const COMMON: &str = "Common";

/// Supported scripts in classification priority order. Common and Latin
/// lead because most validation input is Latin/ASCII-biased; every script
/// is still tried until one matches, so the order only affects cost.
pub static SCRIPTS: [&str; 44] = [
    COMMON,
    "Latin",
    "Cyrillic",
    "Arabic",
    "Armenian",
    "Bengali",
    "Bopomofo",
    "Braille",
    "Buhid",
    "Canadian_Aboriginal",
    "Cherokee",
    "Devanagari",
    "Ethiopic",
    "Georgian",
    "Greek",
    "Gujarati",
    "Gurmukhi",
    "Han",
    "Hangul",
    "Hanunoo",
    "Hebrew",
    "Hiragana",
    "Inherited",
    "Kannada",
    "Katakana",
    "Khmer",
    "Lao",
    "Limbu",
    "Malayalam",
    "Mongolian",
    "Myanmar",
    "Ogham",
    "Oriya",
    "Runic",
    "Sinhala",
    "Syriac",
    "Tagalog",
    "Tagbanwa",
    "Tamil",
    "Telugu",
    "Thaana",
    "Thai",
    "Tibetan",
    "Yi",
];

/// Whether `script` is the Common script.
pub fn is_common(script: &str) -> bool {
    script == COMMON
}

/// Whether `script` is in the supported list.
pub fn is_supported(script: &str) -> bool {
    SCRIPTS.contains(&script)
}

/// The membership rule recorded for a script match: plain Common
/// membership, or the union of Common with the named script.
pub fn match_rule(script: &str) -> Result<String, RunaError> {
    if !is_supported(script) {
        return Err(RunaError::UnknownScript {
            script: script.to_owned(),
        });
    }
    Ok(if is_common(script) {
        format!("\\p{{{}}}", COMMON)
    } else {
        format!("\\p{{{}}}|\\p{{{}}}", COMMON, script)
    })
}

/// Whether `ch` satisfies the named script's rule: a member of the script
/// itself, or of Common. Fails on names outside the supported list; the
/// analyzer never produces such names, so this guards callers only.
pub fn matches(ch: char, script: &str) -> Result<bool, RunaError> {
    matches_with_source(ch, script, &UCD)
}

/// `matches` against a caller-supplied property source.
pub fn matches_with_source(
    ch: char,
    script: &str,
    source: &dyn PropertySource,
) -> Result<bool, RunaError> {
    if !is_supported(script) {
        return Err(RunaError::UnknownScript {
            script: script.to_owned(),
        });
    }
    Ok(matches_unchecked(ch, script, source))
}

/// Membership test for names already known to be supported.
pub(crate) fn matches_unchecked(ch: char, script: &str, source: &dyn PropertySource) -> bool {
    source.is_in_script(ch, script) || source.is_in_script(ch, COMMON)
}

/// First script in priority order whose rule `ch` satisfies.
pub(crate) fn first_match(ch: char, source: &dyn PropertySource) -> Option<&'static str> {
    SCRIPTS
        .iter()
        .copied()
        .find(|script| matches_unchecked(ch, script, source))
}
