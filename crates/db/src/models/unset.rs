//! Deserializers that fold legacy "not supplied" wire values into `None`.
//!
//! Older clients send `""`, `-1`, `"N"` or the zero date instead of omitting
//! a field. A folded field keeps its stored value on merge.

use filmlib_core::actor::Gender;
use filmlib_core::movie::RATING_UNSET;
use filmlib_core::types::Date;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// `""` (or all-whitespace) → `None`. For fields where blank is invalid.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Exactly `""` → `None`. Whitespace-only text is kept as a value.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Zero date written by legacy clients for "not supplied".
const ZERO_DATE: &str = "0001-01-01";

/// `""` or `"0001-01-01"` → `None`; otherwise a `YYYY-MM-DD` date.
pub(crate) fn date_or_unset<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => {
            let raw = raw.trim();
            if raw.is_empty() || raw == ZERO_DATE {
                return Ok(None);
            }
            raw.parse::<Date>()
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid date '{raw}': {e}")))
        }
    }
}

/// `-1` → `None`.
pub(crate) fn rating_or_unset<'de, D>(deserializer: D) -> Result<Option<i16>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<i16>::deserialize(deserializer)?;
    Ok(value.filter(|&r| r != RATING_UNSET))
}

/// `"N"` → `None`; `"M"` / `"W"` → the gender; anything else is an error.
pub(crate) fn gender_or_unset<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => Gender::parse_update(&raw).map_err(D::Error::custom),
    }
}
