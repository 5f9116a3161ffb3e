//! Request handlers for the catalog resources.
//!
//! Handlers check authorization through extractors, validate input with the
//! rules in `filmlib_core`, then delegate to the services and wrap results
//! in the `{ "data": ... }` envelope.

pub mod actors;
pub mod movies;

use filmlib_core::error::CoreError;
use filmlib_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Reject negative path IDs before they reach a service.
fn checked_id(id: DbId) -> AppResult<DbId> {
    if id < 0 {
        return Err(AppError::BadRequest(format!(
            "Id must not be negative, got {id}"
        )));
    }
    Ok(id)
}

/// Lift a core validation result into an [`AppError`].
fn validated(result: Result<(), String>) -> AppResult<()> {
    result.map_err(|msg| AppError::Core(CoreError::Validation(msg)))
}
