use filmlib_db::DbPool;

use crate::services::{ActorService, MovieService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
}

impl AppState {
    pub fn actor_service(&self) -> ActorService<DbPool> {
        ActorService::new(self.pool.clone())
    }

    pub fn movie_service(&self) -> MovieService<DbPool, DbPool> {
        MovieService::new(self.pool.clone(), self.actor_service())
    }
}
