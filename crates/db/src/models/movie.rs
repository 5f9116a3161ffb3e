//! Movie entity model and DTOs.

use filmlib_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::unset::{blank_as_none, date_or_unset, empty_as_none, rating_or_unset};

/// A movie row from the `movies` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub movie_id: DbId,
    pub title: String,
    pub description: String,
    pub release_date: Date,
    pub rating: i16,
}

/// A movie with the IDs of the actors associated with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    pub actor_ids: Vec<DbId>,
}

/// DTO for creating a new movie together with its actor associations.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub release_date: Date,
    pub rating: i16,
    #[serde(default, alias = "actors")]
    pub actor_ids: Vec<DbId>,
}

/// DTO for updating a movie's scalar fields. Absent fields keep their stored
/// value; associations are never touched.
///
/// Accepts the legacy markers `""` for text, `""` or `"0001-01-01"` for the
/// release date and `-1` for rating as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "date_or_unset")]
    pub release_date: Option<Date>,
    #[serde(default, deserialize_with = "rating_or_unset")]
    pub rating: Option<i16>,
}

impl UpdateMovie {
    /// Overlay the supplied fields onto `stored`.
    pub fn merge_into(self, stored: Movie) -> Movie {
        Movie {
            movie_id: stored.movie_id,
            title: self.title.unwrap_or(stored.title),
            description: self.description.unwrap_or(stored.description),
            release_date: self.release_date.unwrap_or(stored.release_date),
            rating: self.rating.unwrap_or(stored.rating),
        }
    }
}

/// Query parameters for `GET /movies` (`?sort=&direction=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieListParams {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

/// Query parameters for `GET /movies/search` (`?actor=&title=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieSearchParams {
    pub actor: Option<String>,
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Movie {
        Movie {
            movie_id: 3,
            title: "The Matrix".into(),
            description: "Wake up, Neo.".into(),
            release_date: Date::from_ymd_opt(1999, 3, 31).unwrap(),
            rating: 9,
        }
    }

    #[test]
    fn all_sentinel_update_leaves_movie_identical() {
        let update: UpdateMovie = serde_json::from_str(
            r#"{"title": "", "description": "", "release_date": "", "rating": -1}"#,
        )
        .unwrap();
        assert_eq!(update.merge_into(stored()), stored());
    }

    #[test]
    fn zero_release_date_is_absent() {
        let update: UpdateMovie =
            serde_json::from_str(r#"{"release_date": "0001-01-01"}"#).unwrap();
        assert_eq!(update.release_date, None);
        assert_eq!(update.merge_into(stored()), stored());
    }

    #[test]
    fn malformed_release_date_is_rejected() {
        let result = serde_json::from_str::<UpdateMovie>(r#"{"release_date": "31.03.1999"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn supplied_description_replaces_stored_one() {
        let update: UpdateMovie = serde_json::from_str(r#"{"description": " "}"#).unwrap();
        let merged = update.merge_into(stored());
        assert_eq!(merged.description, " ");
        assert_eq!(merged.title, "The Matrix");
    }

    #[test]
    fn zero_rating_is_a_real_value() {
        let update: UpdateMovie = serde_json::from_str(r#"{"rating": 0}"#).unwrap();
        assert_eq!(update.merge_into(stored()).rating, 0);
    }

    #[test]
    fn create_accepts_legacy_actors_field() {
        let create: CreateMovie = serde_json::from_str(
            r#"{"title": "Speed", "release_date": "1994-06-10", "rating": 7, "actors": [1, 2]}"#,
        )
        .unwrap();
        assert_eq!(create.actor_ids, vec![1, 2]);
        assert_eq!(create.description, "");
    }

    #[test]
    fn detail_flattens_movie_fields() {
        let value = serde_json::to_value(MovieDetail {
            movie: stored(),
            actor_ids: vec![1, 2],
        })
        .unwrap();
        assert_eq!(value["movie_id"], 3);
        assert_eq!(value["release_date"], "1999-03-31");
        assert_eq!(value["actor_ids"], serde_json::json!([1, 2]));
    }
}
