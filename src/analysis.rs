// analysis.rs - Script-consistency analysis.
//
// Scans a string one codepoint at a time, classifies each against the
// priority-ordered script list, and validates every match against the
// base script established by the first non-Common character. A single
// foreign-script letter among Latin letters invalidates the whole string,
// while digits, punctuation and whitespace never conflict with anything.

use std::fmt;

use crate::character::Character;
use crate::error::RunaError;
use crate::script;
use crate::unicode::{PropertySource, UCD};

/// Classification record for one scanned character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptInspection {
    /// The inspected character.
    pub character: Character,
    /// The script that matched.
    pub script: &'static str,
    /// Whether the match is consistent with the subject's base script.
    pub is_valid: bool,
    /// The membership rule that matched.
    pub match_rule: String,
}

/// Eager script-consistency scan of a subject string.
///
/// # Examples
///
/// ```
/// use runa::analysis::ScriptAnalysis;
///
/// let scan = ScriptAnalysis::new("admin").unwrap();
/// assert!(scan.is_inspection_valid());
/// assert_eq!(scan.script(), Some("Latin"));
///
/// // Cyrillic а masquerading as Latin a.
/// let scan = ScriptAnalysis::new("аdmin").unwrap();
/// assert!(!scan.is_inspection_valid());
/// ```
#[derive(Debug, Clone)]
pub struct ScriptAnalysis {
    subject: String,
    detected: Option<&'static str>,
    inspections: Vec<ScriptInspection>,
}

impl ScriptAnalysis {
    /// Scan `subject` using the default property source.
    pub fn new(subject: &str) -> Result<ScriptAnalysis, RunaError> {
        ScriptAnalysis::with_source(subject, &UCD)
    }

    /// Scan `subject` against a caller-supplied property source.
    pub fn with_source(
        subject: &str,
        source: &dyn PropertySource,
    ) -> Result<ScriptAnalysis, RunaError> {
        let mut detected: Option<&'static str> = None;
        let mut previous: Option<char> = None;
        let mut inspections: Vec<ScriptInspection> = Vec::new();

        for ch in subject.chars() {
            // Runs of the same character duplicate the previous record
            // instead of re-running classification.
            if previous == Some(ch) {
                if let Some(last) = inspections.last().cloned() {
                    inspections.push(last);
                    continue;
                }
            }

            // First matching script wins. Characters from scripts outside
            // the supported list produce no record and cannot invalidate
            // the subject.
            let Some(matched) = script::first_match(ch, source) else {
                continue;
            };

            let is_valid = script::is_common(matched)
                || detected.is_none()
                || detected == Some(matched);
            if detected.is_none() && !script::is_common(matched) {
                detected = Some(matched);
            }

            inspections.push(ScriptInspection {
                character: Character::with_source(ch.encode_utf8(&mut [0u8; 4]), source)?,
                script: matched,
                is_valid,
                match_rule: script::match_rule(matched)?,
            });
            previous = Some(ch);
        }

        Ok(ScriptAnalysis {
            subject: subject.to_owned(),
            detected,
            inspections,
        })
    }

    /// The scanned subject.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// One record per scanned character, in order.
    pub fn inspections(&self) -> &[ScriptInspection] {
        &self.inspections
    }

    /// The base script: the first non-Common script encountered. Never
    /// changes once set; Common characters never establish it.
    pub fn base_script(&self) -> Option<&'static str> {
        self.detected
    }

    /// The subject's detected script: the first record's match.
    pub fn script(&self) -> Option<&'static str> {
        self.inspections.first().map(|inspection| inspection.script)
    }

    /// Whether every scanned character is consistent with the base script.
    /// An empty subject is trivially consistent.
    pub fn is_inspection_valid(&self) -> bool {
        self.subject.is_empty()
            || self
                .inspections
                .iter()
                .all(|inspection| inspection.is_valid)
    }
}

impl fmt::Display for ScriptAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.script().unwrap_or(""))
    }
}
