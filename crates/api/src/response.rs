//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope.

use filmlib_core::types::DbId;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Payload returned by create and delete endpoints.
#[derive(Debug, Serialize)]
pub struct IdPayload {
    pub id: DbId,
}

impl DataResponse<IdPayload> {
    pub fn id(id: DbId) -> Self {
        DataResponse {
            data: IdPayload { id },
        }
    }
}
