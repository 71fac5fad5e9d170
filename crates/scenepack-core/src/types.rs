//! Common types used across scenepack
//!
//! This module provides the shared type definitions for the export pipeline:
//! the scene document payload and the texture registration records handed
//! over by the upstream scene importer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The serializable scene payload: an arbitrarily nested tree of maps,
/// sequences, numbers, strings, booleans, and null.
pub type Document = Value;

/// A texture registered by the upstream scene importer.
///
/// The `file_path` attribute is a raw string that may carry leading option
/// tokens in front of the actual filesystem path, e.g. `"-mm 4 tex/wood.png"`.
/// The real path is always the last whitespace-delimited token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureRegistration {
    /// Raw path value, possibly prefixed with option tokens
    pub file_path: String,

    /// Any other attributes carried on the registration; ignored by the
    /// export pipeline but preserved for the caller
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl TextureRegistration {
    /// Create a registration from a raw `file_path` value
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            extra: HashMap::new(),
        }
    }
}

/// Mapping from opaque texture identifier to its registration.
/// Iteration order is irrelevant to the export pipeline.
pub type RegistrationMap = HashMap<String, TextureRegistration>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_from_json_keeps_extra_fields() {
        let reg: TextureRegistration = serde_json::from_value(serde_json::json!({
            "file_path": "-o textures/hull_diff.png",
            "wrap": "repeat",
            "slot": 2,
        }))
        .unwrap();

        assert_eq!(reg.file_path, "-o textures/hull_diff.png");
        assert_eq!(reg.extra["wrap"], "repeat");
        assert_eq!(reg.extra["slot"], 2);
    }
}
