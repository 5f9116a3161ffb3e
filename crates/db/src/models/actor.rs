//! Actor entity model and DTOs.

use filmlib_core::actor::Gender;
use filmlib_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::unset::{blank_as_none, date_or_unset, gender_or_unset};

/// An actor row from the `actors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Actor {
    pub actor_id: DbId,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub gender: Gender,
    pub birth_date: Date,
}

/// A movie an actor appears in, as listed alongside the actor.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ActorMovie {
    pub movie_id: DbId,
    pub title: String,
}

/// An actor together with every movie they appear in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorWithMovies {
    #[serde(flatten)]
    pub actor: Actor,
    pub movies: Vec<ActorMovie>,
}

/// DTO for creating a new actor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActor {
    pub name: String,
    pub gender: Gender,
    pub birth_date: Date,
}

/// DTO for updating an existing actor. Absent fields keep their stored value.
///
/// Accepts the legacy markers `""` for name and birth date and `"N"` for
/// gender as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateActor {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "gender_or_unset")]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "date_or_unset")]
    pub birth_date: Option<Date>,
}

impl UpdateActor {
    /// Overlay the supplied fields onto `stored`.
    pub fn merge_into(self, stored: Actor) -> Actor {
        Actor {
            actor_id: stored.actor_id,
            name: self.name.unwrap_or(stored.name),
            gender: self.gender.unwrap_or(stored.gender),
            birth_date: self.birth_date.unwrap_or(stored.birth_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Actor {
        Actor {
            actor_id: 7,
            name: "Carrie-Anne Moss".into(),
            gender: Gender::W,
            birth_date: Date::from_ymd_opt(1967, 8, 21).unwrap(),
        }
    }

    #[test]
    fn legacy_markers_deserialize_as_absent() {
        let update: UpdateActor =
            serde_json::from_str(r#"{"name": "", "gender": "N"}"#).unwrap();
        assert_eq!(update.name, None);
        assert_eq!(update.gender, None);
        assert_eq!(update.birth_date, None);
    }

    #[test]
    fn all_legacy_markers_leave_actor_identical() {
        let update: UpdateActor =
            serde_json::from_str(r#"{"name": "", "gender": "N", "birth_date": ""}"#).unwrap();
        assert_eq!(update.birth_date, None);
        assert_eq!(update.merge_into(stored()), stored());
    }

    #[test]
    fn null_birth_date_is_absent() {
        let update: UpdateActor = serde_json::from_str(r#"{"birth_date": null}"#).unwrap();
        assert_eq!(update.birth_date, None);
    }

    #[test]
    fn unknown_gender_is_rejected() {
        let result = serde_json::from_str::<UpdateActor>(r#"{"gender": "X"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_update_keeps_stored_actor() {
        let merged = UpdateActor::default().merge_into(stored());
        assert_eq!(merged, stored());
    }

    #[test]
    fn supplied_fields_override_stored_ones() {
        let update: UpdateActor =
            serde_json::from_str(r#"{"gender": "M", "birth_date": "1970-01-02"}"#).unwrap();
        let merged = update.merge_into(stored());
        assert_eq!(merged.actor_id, 7);
        assert_eq!(merged.name, "Carrie-Anne Moss");
        assert_eq!(merged.gender, Gender::M);
        assert_eq!(merged.birth_date, Date::from_ymd_opt(1970, 1, 2).unwrap());
    }

    #[test]
    fn actor_with_movies_flattens_actor_fields() {
        let value = serde_json::to_value(ActorWithMovies {
            actor: stored(),
            movies: vec![ActorMovie {
                movie_id: 1,
                title: "The Matrix".into(),
            }],
        })
        .unwrap();
        assert_eq!(value["actor_id"], 7);
        assert_eq!(value["gender"], "W");
        assert_eq!(value["birth_date"], "1967-08-21");
        assert_eq!(value["movies"][0]["title"], "The Matrix");
    }
}
