// error.rs - Error types for Runa.
//
// Three semantic failure classes: inputs that are not a single codepoint,
// inputs outside every supported encoding tier, and script names outside
// the supported list.

use std::fmt;

/// Error type for character construction and script classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunaError {
    /// Input does not resolve to exactly one codepoint, or its code-unit
    /// count exceeds the detected encoding tier's maximum.
    InvalidLength { received: usize, max: usize },
    /// Input satisfies none of the ASCII/UTF-8/UTF-16/UTF-32 tier tests.
    UnsupportedEncoding { glyph: String },
    /// Script name outside the supported list. Never produced by the
    /// analyzer itself, which only supplies names from its own fixed list.
    UnknownScript { script: String },
}

impl fmt::Display for RunaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunaError::InvalidLength { received, max } => write!(
                f,
                "characters must occupy at most {} code unit{}, received {}",
                max,
                if *max == 1 { "" } else { "s" },
                received
            ),
            RunaError::UnsupportedEncoding { glyph } => {
                write!(f, "unknown encoding for character glyph `{}`", glyph)
            }
            RunaError::UnknownScript { script } => {
                write!(f, "an unknown script `{}` was received", script)
            }
        }
    }
}

impl std::error::Error for RunaError {}
