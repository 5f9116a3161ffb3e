//! Actor constants and validation functions.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of an actor name in characters.
pub const MAX_ACTOR_NAME_LENGTH: usize = 255;

/// Legacy wire value meaning "gender not supplied" in update requests.
pub const GENDER_UNSET: &str = "N";

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// Actor gender as stored in `actors.gender`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    M,
    #[serde(rename = "W")]
    W,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::M => "M",
            Gender::W => "W",
        }
    }

    /// Parse the value of an update request's gender field.
    ///
    /// `"N"` is the unset marker and yields `Ok(None)`.
    pub fn parse_update(value: &str) -> Result<Option<Gender>, String> {
        if value == GENDER_UNSET {
            return Ok(None);
        }
        Gender::try_from(value).map(Some)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Gender {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "M" => Ok(Gender::M),
            "W" => Ok(Gender::W),
            other => Err(format!("Invalid gender '{other}'. Must be one of: M, W")),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Gender::try_from(value.as_str())
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate an actor name: must be non-blank and within the length limit.
pub fn validate_actor_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Actor name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_ACTOR_NAME_LENGTH {
        return Err(format!(
            "Actor name exceeds maximum length of {MAX_ACTOR_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}
