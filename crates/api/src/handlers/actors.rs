//! Handlers for the `/actors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use filmlib_core::actor::validate_actor_name;
use filmlib_core::types::DbId;
use filmlib_db::models::actor::{Actor, ActorWithMovies, CreateActor, UpdateActor};

use super::{checked_id, validated};
use crate::error::AppResult;
use crate::middleware::auth::{AuthRole, RequireAdmin};
use crate::response::{DataResponse, IdPayload};
use crate::state::AppState;

/// POST /api/v1/actors
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Json(input): Json<CreateActor>,
) -> AppResult<(StatusCode, Json<DataResponse<IdPayload>>)> {
    validated(validate_actor_name(&input.name))?;

    let id = state.actor_service().create_actor(&input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::id(id))))
}

/// GET /api/v1/actors
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthRole,
) -> AppResult<Json<DataResponse<Vec<ActorWithMovies>>>> {
    let actors = state.actor_service().list_actors().await?;
    Ok(Json(DataResponse { data: actors }))
}

/// GET /api/v1/actors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthRole,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Actor>>> {
    let actor = state.actor_service().get_actor(checked_id(id)?).await?;
    Ok(Json(DataResponse { data: actor }))
}

/// PUT /api/v1/actors/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateActor>,
) -> AppResult<Json<DataResponse<Actor>>> {
    let id = checked_id(id)?;
    if let Some(name) = &input.name {
        validated(validate_actor_name(name))?;
    }

    let actor = state.actor_service().update_actor(id, input).await?;
    Ok(Json(DataResponse { data: actor }))
}

/// DELETE /api/v1/actors/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<IdPayload>>> {
    let deleted = state.actor_service().delete_actor(checked_id(id)?).await?;
    Ok(Json(DataResponse::id(deleted)))
}
