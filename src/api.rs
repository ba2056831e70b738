// api.rs - Convenience entry points.
//
// Thin functional layer over `Character` and `ScriptAnalysis` for callers
// that just want an answer.

use crate::analysis::ScriptAnalysis;
use crate::character::Character;
use crate::error::RunaError;

/// Inspect a single character.
///
/// # Examples
///
/// ```
/// use runa::api::inspect;
///
/// let ch = inspect("🍗").unwrap();
/// assert_eq!(ch.to_codepoint(), "U+1F357");
/// assert_eq!(ch.name(), "POULTRY LEG");
/// assert_eq!(ch.size(), 4);
/// ```
pub fn inspect(character: &str) -> Result<Character, RunaError> {
    Character::new(character)
}

/// Scan a string for script consistency.
///
/// # Examples
///
/// ```
/// use runa::api::analyze;
///
/// assert!(analyze("admin").unwrap().is_inspection_valid());
/// assert!(!analyze("аdmin").unwrap().is_inspection_valid());
/// ```
pub fn analyze(subject: &str) -> Result<ScriptAnalysis, RunaError> {
    ScriptAnalysis::new(subject)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_wraps_character_construction() {
        assert_eq!(inspect("A").unwrap().to_codepoint(), "U+0041");
        assert!(inspect("asdf").is_err());
    }

    #[test]
    fn analyze_wraps_script_analysis() {
        assert_eq!(analyze("abc").unwrap().script(), Some("Latin"));
    }
}
