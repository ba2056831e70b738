// prelude.rs - Common imports for typical usage.
//
// `use runa::prelude::*;` pulls in the inspection and analysis types.

pub use crate::analysis::{ScriptAnalysis, ScriptInspection};
pub use crate::api::{analyze, inspect};
pub use crate::character::Character;
pub use crate::encodings::{Encoding, EncodingSupport};
pub use crate::error::RunaError;
