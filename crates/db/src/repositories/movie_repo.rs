//! Repository for the `movies` table and the movie side of `movie_actors`.

use filmlib_core::movie::{MovieOrder, MovieSearch};
use filmlib_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie};

/// Column list for `movies` queries.
const COLUMNS: &str = "movie_id, title, description, release_date, rating";

/// Column list for `movies` queries aliased as `m` in joins.
const M_COLUMNS: &str = "m.movie_id, m.title, m.description, m.release_date, m.rating";

/// `ILIKE` pattern matching `fragment` anywhere, with `\`, `%` and `_`
/// escaped.
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Provides CRUD, sorted listing, and search for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a movie and one association row per actor ID.
    ///
    /// Runs in a transaction. If any insert fails (for example an actor ID
    /// that violates the foreign key) nothing is committed: no movie without
    /// its associations, no orphaned associations.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let movie_id: DbId = sqlx::query_scalar(
            "INSERT INTO movies (title, description, release_date, rating)
             VALUES ($1, $2, $3, $4)
             RETURNING movie_id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.release_date)
        .bind(input.rating)
        .fetch_one(&mut *tx)
        .await?;

        for actor_id in &input.actor_ids {
            sqlx::query("INSERT INTO movie_actors (movie_id, actor_id) VALUES ($1, $2)")
                .bind(movie_id)
                .bind(actor_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        tracing::debug!(
            movie_id,
            actor_count = input.actor_ids.len(),
            "Committed movie insert"
        );
        Ok(movie_id)
    }

    /// Overwrite the scalar fields of the movie identified by `movie.movie_id`.
    ///
    /// A single statement; associations are untouched. Returns `None` if the
    /// row no longer exists.
    pub async fn update(pool: &PgPool, movie: &Movie) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET title = $1, description = $2, release_date = $3, rating = $4
             WHERE movie_id = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&movie.title)
            .bind(&movie.description)
            .bind(movie.release_date)
            .bind(movie.rating)
            .bind(movie.movie_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie and all of its actor associations.
    ///
    /// Runs in a transaction: association rows first, then the movie row.
    /// Returns the deleted ID, or `None` if no movie row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM movie_actors WHERE movie_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM movies WHERE movie_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(movie_id = id, rows = result.rows_affected(), "Committed movie delete");
        Ok((result.rows_affected() > 0).then_some(id))
    }

    /// List all movies in the given order.
    pub async fn list(pool: &PgPool, order: MovieOrder) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY {}", order.sql());
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Find a movie by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE movie_id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// IDs of the actors associated with a movie, ascending.
    pub async fn actor_ids(pool: &PgPool, movie_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT actor_id FROM movie_actors WHERE movie_id = $1 ORDER BY actor_id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive substring search, highest rated first.
    ///
    /// `%` and `_` in a fragment match literally.
    ///
    /// Actor searches join through `movie_actors`; `DISTINCT` keeps a movie
    /// from appearing once per matching actor.
    pub async fn search(pool: &PgPool, search: &MovieSearch) -> Result<Vec<Movie>, sqlx::Error> {
        match search {
            MovieSearch::ActorAndTitle { actor, title } => {
                let query = format!(
                    "SELECT DISTINCT {M_COLUMNS}
                     FROM movies m
                     JOIN movie_actors ma ON ma.movie_id = m.movie_id
                     JOIN actors a ON a.actor_id = ma.actor_id
                     WHERE a.name ILIKE $1 ESCAPE '\\'
                       AND m.title ILIKE $2 ESCAPE '\\'
                     ORDER BY m.rating DESC, m.movie_id ASC"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(contains_pattern(actor))
                    .bind(contains_pattern(title))
                    .fetch_all(pool)
                    .await
            }
            MovieSearch::Title(title) => {
                let query = format!(
                    "SELECT {COLUMNS}
                     FROM movies
                     WHERE title ILIKE $1 ESCAPE '\\'
                     ORDER BY rating DESC, movie_id ASC"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(contains_pattern(title))
                    .fetch_all(pool)
                    .await
            }
            MovieSearch::Actor(actor) => {
                let query = format!(
                    "SELECT DISTINCT {M_COLUMNS}
                     FROM movies m
                     JOIN movie_actors ma ON ma.movie_id = m.movie_id
                     JOIN actors a ON a.actor_id = ma.actor_id
                     WHERE a.name ILIKE $1 ESCAPE '\\'
                     ORDER BY m.rating DESC, m.movie_id ASC"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(contains_pattern(actor))
                    .fetch_all(pool)
                    .await
            }
        }
    }
}
