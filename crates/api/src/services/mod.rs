//! Actor and movie services.
//!
//! Services hold the business rules that sit between the HTTP handlers and
//! the repositories: partial-update merging, existence guards, the dangling
//! actor check on movie creation, sort defaulting and search dispatch. They
//! are generic over the [`ActorStore`] / [`MovieStore`] seams so they can be
//! exercised without a database; [`PgPool`] implements both by delegating
//! to the repositories.

pub mod actor_service;
pub mod movie_service;

pub use actor_service::ActorService;
pub use movie_service::MovieService;

use async_trait::async_trait;
use filmlib_core::movie::{MovieOrder, MovieSearch};
use filmlib_core::types::DbId;
use filmlib_db::models::actor::{Actor, ActorWithMovies, CreateActor};
use filmlib_db::models::movie::{CreateMovie, Movie};
use filmlib_db::repositories::{ActorRepo, MovieRepo};
use sqlx::PgPool;

/// Persistence operations the actor service depends on.
#[async_trait]
pub trait ActorStore: Send + Sync {
    async fn create(&self, input: &CreateActor) -> Result<DbId, sqlx::Error>;
    async fn update(&self, actor: &Actor) -> Result<Option<Actor>, sqlx::Error>;
    async fn delete(&self, id: DbId) -> Result<Option<DbId>, sqlx::Error>;
    async fn find_by_id(&self, id: DbId) -> Result<Option<Actor>, sqlx::Error>;
    async fn list_with_movies(&self) -> Result<Vec<ActorWithMovies>, sqlx::Error>;
    async fn exists(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// Persistence operations the movie service depends on.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn create(&self, input: &CreateMovie) -> Result<DbId, sqlx::Error>;
    async fn update(&self, movie: &Movie) -> Result<Option<Movie>, sqlx::Error>;
    async fn delete(&self, id: DbId) -> Result<Option<DbId>, sqlx::Error>;
    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error>;
    async fn actor_ids(&self, movie_id: DbId) -> Result<Vec<DbId>, sqlx::Error>;
    async fn list(&self, order: MovieOrder) -> Result<Vec<Movie>, sqlx::Error>;
    async fn search(&self, search: &MovieSearch) -> Result<Vec<Movie>, sqlx::Error>;
}

#[async_trait]
impl ActorStore for PgPool {
    async fn create(&self, input: &CreateActor) -> Result<DbId, sqlx::Error> {
        ActorRepo::create(self, input).await
    }

    async fn update(&self, actor: &Actor) -> Result<Option<Actor>, sqlx::Error> {
        ActorRepo::update(self, actor).await
    }

    async fn delete(&self, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        ActorRepo::delete(self, id).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        ActorRepo::find_by_id(self, id).await
    }

    async fn list_with_movies(&self) -> Result<Vec<ActorWithMovies>, sqlx::Error> {
        ActorRepo::list_with_movies(self).await
    }

    async fn exists(&self, id: DbId) -> Result<bool, sqlx::Error> {
        ActorRepo::exists(self, id).await
    }
}

#[async_trait]
impl MovieStore for PgPool {
    async fn create(&self, input: &CreateMovie) -> Result<DbId, sqlx::Error> {
        MovieRepo::create(self, input).await
    }

    async fn update(&self, movie: &Movie) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::update(self, movie).await
    }

    async fn delete(&self, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        MovieRepo::delete(self, id).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::find_by_id(self, id).await
    }

    async fn actor_ids(&self, movie_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        MovieRepo::actor_ids(self, movie_id).await
    }

    async fn list(&self, order: MovieOrder) -> Result<Vec<Movie>, sqlx::Error> {
        MovieRepo::list(self, order).await
    }

    async fn search(&self, search: &MovieSearch) -> Result<Vec<Movie>, sqlx::Error> {
        MovieRepo::search(self, search).await
    }
}
