//! Movie business rules on top of a [`MovieStore`], consulting the actor
//! service for referential checks.

use filmlib_core::error::CoreError;
use filmlib_core::movie::{MovieOrder, MovieSearch};
use filmlib_core::types::DbId;
use filmlib_db::models::movie::{CreateMovie, Movie, MovieDetail, UpdateMovie};

use super::{ActorService, ActorStore, MovieStore};
use crate::error::{AppError, AppResult};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// Movie operations.
pub struct MovieService<M, A> {
    store: M,
    actors: ActorService<A>,
}

impl<M: MovieStore, A: ActorStore> MovieService<M, A> {
    pub fn new(store: M, actors: ActorService<A>) -> Self {
        Self { store, actors }
    }

    /// Create a movie with its actor associations.
    ///
    /// Every referenced actor must exist; otherwise the request fails with
    /// `DanglingActorReference` naming the first missing ID and the store is
    /// never called.
    pub async fn create_movie(&self, input: &CreateMovie) -> AppResult<DbId> {
        if let Some(actor_id) = self.actors.first_missing_actor(&input.actor_ids).await? {
            tracing::warn!(actor_id, title = %input.title, "Movie references unknown actor");
            return Err(CoreError::DanglingActorReference { actor_id }.into());
        }

        let movie_id = self.store.create(input).await?;
        tracing::info!(
            movie_id,
            actor_count = input.actor_ids.len(),
            "Movie created"
        );
        Ok(movie_id)
    }

    /// Merge `input` onto the stored movie and write the result.
    ///
    /// The merge is complete before the store sees anything. Associations
    /// are not touched.
    pub async fn update_movie(&self, id: DbId, input: UpdateMovie) -> AppResult<Movie> {
        let stored = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let merged = input.merge_into(stored);
        let updated = self
            .store
            .update(&merged)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(movie_id = id, "Movie updated");
        Ok(updated)
    }

    /// Delete a movie together with its actor associations.
    pub async fn delete_movie(&self, id: DbId) -> AppResult<DbId> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let deleted = self.store.delete(id).await?.ok_or_else(|| not_found(id))?;
        tracing::info!(movie_id = deleted, "Movie deleted");
        Ok(deleted)
    }

    pub async fn get_movie(&self, id: DbId) -> AppResult<MovieDetail> {
        let movie = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let actor_ids = self.store.actor_ids(id).await?;
        Ok(MovieDetail { movie, actor_ids })
    }

    /// List movies. Unrecognised sort values fall back to rating, descending.
    pub async fn list_movies(&self, sort: &str, direction: &str) -> AppResult<Vec<Movie>> {
        let order = MovieOrder::resolve(sort, direction);
        tracing::debug!(?order, "Listing movies");
        Ok(self.store.list(order).await?)
    }

    /// Search by actor name fragment, title fragment, or both.
    ///
    /// Both fragments blank is a validation error and issues no query.
    pub async fn search_movies(&self, actor: &str, title: &str) -> AppResult<Vec<Movie>> {
        let search = MovieSearch::from_fragments(actor, title).map_err(CoreError::Validation)?;
        tracing::debug!(?search, "Searching movies");
        Ok(self.store.search(&search).await?)
    }
}
