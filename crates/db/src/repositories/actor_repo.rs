//! Repository for the `actors` table and the actor side of `movie_actors`.

use std::collections::HashMap;

use filmlib_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::actor::{Actor, ActorMovie, ActorWithMovies, CreateActor};

/// Column list for `actors` queries.
const COLUMNS: &str = "actor_id, name, gender, birth_date";

/// One `movie_actors` association joined with the movie title.
#[derive(FromRow)]
struct ActorMovieLink {
    actor_id: DbId,
    movie_id: DbId,
    title: String,
}

/// Provides CRUD and existence checks for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning the generated ID.
    pub async fn create(pool: &PgPool, input: &CreateActor) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO actors (name, gender, birth_date)
             VALUES ($1, $2, $3)
             RETURNING actor_id",
        )
        .bind(&input.name)
        .bind(input.gender.as_str())
        .bind(input.birth_date)
        .fetch_one(pool)
        .await
    }

    /// Overwrite every mutable field of the actor identified by `actor.actor_id`.
    ///
    /// Unconditional: the caller is expected to have merged the request onto
    /// the stored row. Returns `None` if the row no longer exists.
    pub async fn update(pool: &PgPool, actor: &Actor) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!(
            "UPDATE actors SET name = $1, gender = $2, birth_date = $3
             WHERE actor_id = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(&actor.name)
            .bind(actor.gender.as_str())
            .bind(actor.birth_date)
            .bind(actor.actor_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an actor and all of its movie associations.
    ///
    /// Runs in a transaction: association rows first, then the actor row.
    /// Returns the deleted ID, or `None` if no actor row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM movie_actors WHERE actor_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM actors WHERE actor_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(actor_id = id, rows = result.rows_affected(), "Committed actor delete");
        Ok((result.rows_affected() > 0).then_some(id))
    }

    /// Find an actor by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE actor_id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all actors by ID, each with the movies they appear in.
    ///
    /// Associations for the whole page are fetched with one extra query and
    /// grouped in memory. An actor without movies gets an empty list.
    pub async fn list_with_movies(pool: &PgPool) -> Result<Vec<ActorWithMovies>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY actor_id");
        let actors = sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await?;
        if actors.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = actors.iter().map(|a| a.actor_id).collect();
        let links = sqlx::query_as::<_, ActorMovieLink>(
            "SELECT ma.actor_id, m.movie_id, m.title
             FROM movie_actors ma
             JOIN movies m ON m.movie_id = ma.movie_id
             WHERE ma.actor_id = ANY($1)
             ORDER BY ma.actor_id, m.movie_id",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut by_actor: HashMap<DbId, Vec<ActorMovie>> = HashMap::new();
        for link in links {
            by_actor.entry(link.actor_id).or_default().push(ActorMovie {
                movie_id: link.movie_id,
                title: link.title,
            });
        }

        Ok(actors
            .into_iter()
            .map(|actor| {
                let movies = by_actor.remove(&actor.actor_id).unwrap_or_default();
                ActorWithMovies { actor, movies }
            })
            .collect())
    }

    /// Check whether an actor exists.
    ///
    /// An absent row is `false`, never an error; only a failing query errors.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM actors WHERE actor_id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(count.unwrap_or(0) > 0)
    }
}
