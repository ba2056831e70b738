//! # Runa
//!
//! Unicode character inspection and mixed-script detection for
//! input-validation use cases, such as rejecting homograph spoofing:
//! `"аdmin"` with a Cyrillic `а` masquerading as a Latin `a`.
//!
//! ## Quick Start
//!
//! ```rust
//! use runa::prelude::*;
//!
//! // Per-character inspection.
//! let ch = Character::new("ß").unwrap();
//! assert_eq!(ch.to_codepoint(), "U+00DF");
//! assert_eq!(ch.size(), 2);
//! assert_eq!(ch.encoding(), Encoding::Utf8);
//!
//! // Per-string script consistency.
//! let scan = ScriptAnalysis::new("аdmin").unwrap();
//! assert!(!scan.is_inspection_valid());
//! ```
//!
//! Every property lookup goes through the [`unicode::PropertySource`]
//! capability trait; the default source is backed by the unicode-rs and
//! UNIC character-database crates and is safe to share across threads.
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`character`] | Single-codepoint inspection (`Character`) |
//! | [`analysis`] | Script-consistency scan (`ScriptAnalysis`) |
//! | [`script`] | Supported script list and membership rules |
//! | [`encodings`] | ASCII/UTF-8/UTF-16/UTF-32 tier classification |
//! | [`unicode`] | Property source trait and UCD-backed default |
//! | [`error`] | Error taxonomy |
//! | [`api`] | `inspect` / `analyze` convenience functions |

pub mod analysis;
pub mod api;
pub mod character;
pub mod encodings;
pub mod error;
pub mod prelude;
pub mod script;
pub mod unicode;
