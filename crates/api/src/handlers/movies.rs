//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use filmlib_core::movie::{
    validate_actor_ids, validate_description, validate_rating, validate_title,
};
use filmlib_core::types::DbId;
use filmlib_db::models::movie::{
    CreateMovie, Movie, MovieDetail, MovieListParams, MovieSearchParams, UpdateMovie,
};

use super::{checked_id, validated};
use crate::error::AppResult;
use crate::middleware::auth::{AuthRole, RequireAdmin};
use crate::response::{DataResponse, IdPayload};
use crate::state::AppState;

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<DataResponse<IdPayload>>)> {
    validated(validate_title(&input.title))?;
    validated(validate_description(&input.description))?;
    validated(validate_rating(input.rating))?;
    validated(validate_actor_ids(&input.actor_ids))?;

    let id = state.movie_service().create_movie(&input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::id(id))))
}

/// GET /api/v1/movies?sort=&direction=
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthRole,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let movies = state
        .movie_service()
        .list_movies(
            params.sort.as_deref().unwrap_or_default(),
            params.direction.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/search?actor=&title=
pub async fn search(
    State(state): State<AppState>,
    _auth: AuthRole,
    Query(params): Query<MovieSearchParams>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let movies = state
        .movie_service()
        .search_movies(
            params.actor.as_deref().unwrap_or_default(),
            params.title.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthRole,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MovieDetail>>> {
    let movie = state.movie_service().get_movie(checked_id(id)?).await?;
    Ok(Json(DataResponse { data: movie }))
}

/// PUT /api/v1/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Json<DataResponse<Movie>>> {
    let id = checked_id(id)?;
    if let Some(title) = &input.title {
        validated(validate_title(title))?;
    }
    if let Some(description) = &input.description {
        validated(validate_description(description))?;
    }
    if let Some(rating) = input.rating {
        validated(validate_rating(rating))?;
    }

    let movie = state.movie_service().update_movie(id, input).await?;
    Ok(Json(DataResponse { data: movie }))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<IdPayload>>> {
    let deleted = state.movie_service().delete_movie(checked_id(id)?).await?;
    Ok(Json(DataResponse::id(deleted)))
}
