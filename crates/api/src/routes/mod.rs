pub mod actors;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /actors                 list (user), create (admin)
/// /actors/{id}            get (user), update, delete (admin)
///
/// /movies                 list (?sort, direction) (user), create (admin)
/// /movies/search          search (?actor, title) (user)
/// /movies/{id}            get (user), update, delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/actors", actors::router())
        .nest("/movies", movies::router())
}
