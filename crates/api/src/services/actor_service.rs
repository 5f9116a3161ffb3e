//! Actor business rules on top of an [`ActorStore`].

use filmlib_core::error::CoreError;
use filmlib_core::types::DbId;
use filmlib_db::models::actor::{Actor, ActorWithMovies, CreateActor, UpdateActor};

use super::ActorStore;
use crate::error::{AppError, AppResult};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Actor", id })
}

/// Actor operations. Stateless apart from the store handle.
pub struct ActorService<S> {
    store: S,
}

impl<S: ActorStore> ActorService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn create_actor(&self, input: &CreateActor) -> AppResult<DbId> {
        let actor_id = self.store.create(input).await?;
        tracing::info!(actor_id, name = %input.name, "Actor created");
        Ok(actor_id)
    }

    /// Merge `input` onto the stored actor and write the result.
    ///
    /// Fields absent from `input` keep their stored value. Fails with
    /// `NotFound` if the actor is missing before or during the write.
    pub async fn update_actor(&self, id: DbId, input: UpdateActor) -> AppResult<Actor> {
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

        tracing::info!(actor_id = id, "Actor updated");
        Ok(updated)
    }

    /// Delete an actor together with its movie associations.
    pub async fn delete_actor(&self, id: DbId) -> AppResult<DbId> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let deleted = self.store.delete(id).await?.ok_or_else(|| not_found(id))?;
        tracing::info!(actor_id = deleted, "Actor deleted");
        Ok(deleted)
    }

    pub async fn get_actor(&self, id: DbId) -> AppResult<Actor> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list_actors(&self) -> AppResult<Vec<ActorWithMovies>> {
        Ok(self.store.list_with_movies().await?)
    }

    /// Return the first ID in `ids` that has no actor row.
    ///
    /// Checks one ID at a time in request order and stops at the first
    /// missing ID or the first store error. IDs after that are never queried.
    pub async fn first_missing_actor(&self, ids: &[DbId]) -> AppResult<Option<DbId>> {
        for &id in ids {
            if !self.store.exists(id).await? {
                tracing::debug!(actor_id = id, "Referenced actor does not exist");
                return Ok(Some(id));
            }
        }
        Ok(None)
    }

    /// `true` when every ID in `ids` names an existing actor.
    ///
    /// Same lookup order as [`ActorService::first_missing_actor`], for callers
    /// that only need a yes/no answer. Movie creation uses
    /// `first_missing_actor` directly to name the offending ID.
    pub async fn check_actors_exist(&self, ids: &[DbId]) -> AppResult<bool> {
        Ok(self.first_missing_actor(ids).await?.is_none())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use filmlib_core::actor::Gender;
    use filmlib_core::types::Date;

    use super::*;
    use crate::services::fakes::FakeActorStore;

    fn actor(id: DbId, name: &str) -> Actor {
        Actor {
            actor_id: id,
            name: name.into(),
            gender: Gender::M,
            birth_date: Date::from_ymd_opt(1964, 9, 2).unwrap(),
        }
    }

    fn service_with(ids: &[DbId]) -> ActorService<FakeActorStore> {
        ActorService::new(FakeActorStore::with_actors(
            ids.iter().map(|&id| actor(id, "Someone")).collect(),
        ))
    }

    #[tokio::test]
    async fn existence_check_stops_at_first_missing_id() {
        let service = service_with(&[1, 3]);

        let all_exist = service.check_actors_exist(&[1, 2, 3]).await.unwrap();

        assert!(!all_exist);
        assert_eq!(*service.store.exists_calls.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn first_missing_actor_follows_request_order() {
        let service = service_with(&[1]);
        let missing = service.first_missing_actor(&[1, 5, 4]).await.unwrap();
        assert_eq!(missing, Some(5));
    }

    #[tokio::test]
    async fn existence_check_passes_for_known_and_empty_lists() {
        let service = service_with(&[1, 2]);
        assert!(service.check_actors_exist(&[1, 2]).await.unwrap());
        assert!(service.check_actors_exist(&[]).await.unwrap());
    }

    #[tokio::test]
    async fn existence_check_propagates_first_store_error() {
        let store = FakeActorStore {
            fail_exists_on: Some(2),
            ..FakeActorStore::with_actors(vec![actor(1, "A"), actor(3, "C")])
        };
        let service = ActorService::new(store);

        let result = service.check_actors_exist(&[1, 2, 3]).await;

        assert_matches!(result, Err(AppError::Database(sqlx::Error::PoolTimedOut)));
        assert_eq!(*service.store.exists_calls.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn update_keeps_stored_values_for_absent_fields() {
        let service = ActorService::new(FakeActorStore::with_actors(vec![actor(
            7,
            "Keanu Reeves",
        )]));
        let input = UpdateActor {
            gender: Some(Gender::W),
            ..UpdateActor::default()
        };

        let updated = service.update_actor(7, input).await.unwrap();

        assert_eq!(updated.name, "Keanu Reeves");
        assert_eq!(updated.gender, Gender::W);
        assert_eq!(updated.birth_date, Date::from_ymd_opt(1964, 9, 2).unwrap());
    }

    #[tokio::test]
    async fn update_missing_actor_is_not_found_without_write() {
        let service = service_with(&[]);

        let result = service.update_actor(9, UpdateActor::default()).await;

        assert_matches!(
            result,
            Err(AppError::Core(CoreError::NotFound { entity: "Actor", id: 9 }))
        );
        assert!(service.store.writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_of_vanished_row_is_not_found() {
        let store = FakeActorStore {
            vanish_on_write: true,
            ..FakeActorStore::with_actors(vec![actor(4, "Gone")])
        };
        let service = ActorService::new(store);

        let result = service.update_actor(4, UpdateActor::default()).await;

        assert_matches!(result, Err(AppError::Core(CoreError::NotFound { id: 4, .. })));
    }

    #[tokio::test]
    async fn delete_missing_actor_is_not_found() {
        let service = service_with(&[]);
        let result = service.delete_actor(3).await;
        assert_matches!(result, Err(AppError::Core(CoreError::NotFound { id: 3, .. })));
    }

    #[tokio::test]
    async fn delete_returns_deleted_id() {
        let service = service_with(&[3]);
        assert_eq!(service.delete_actor(3).await.unwrap(), 3);
        assert_matches!(
            service.get_actor(3).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
    }

    #[tokio::test]
    async fn create_returns_new_id() {
        let service = service_with(&[]);
        let id = service
            .create_actor(&CreateActor {
                name: "Hugo Weaving".into(),
                gender: Gender::M,
                birth_date: Date::from_ymd_opt(1960, 4, 4).unwrap(),
            })
            .await
            .unwrap();
        assert_eq!(service.get_actor(id).await.unwrap().name, "Hugo Weaving");
        assert_eq!(service.list_actors().await.unwrap().len(), 1);
    }
}
