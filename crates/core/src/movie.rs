//! Movie constants, validation functions, and listing/search query shapes.
//!
//! [`MovieOrder::resolve`] owns the default-sort decision so the store only
//! ever receives a concrete (field, direction) pair. [`MovieSearch`] owns the
//! choice between title-only, actor-only and combined search.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum length of a movie title in characters.
pub const MIN_TITLE_LENGTH: usize = 1;

/// Maximum length of a movie title in characters.
pub const MAX_TITLE_LENGTH: usize = 150;

/// Maximum length of a movie description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Lowest persisted rating.
pub const MIN_RATING: i16 = 0;

/// Highest persisted rating.
pub const MAX_RATING: i16 = 10;

/// Legacy wire value meaning "rating not supplied" in update requests.
pub const RATING_UNSET: i16 = -1;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a movie title: 1 to 150 characters.
pub fn validate_title(title: &str) -> Result<(), String> {
    let len = title.chars().count();
    if len < MIN_TITLE_LENGTH || title.trim().is_empty() {
        return Err("Movie title cannot be empty".to_string());
    }
    if len > MAX_TITLE_LENGTH {
        return Err(format!(
            "Movie title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a movie description: at most 1000 characters, may be empty.
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(format!(
            "Movie description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a rating: must lie in `[0, 10]`.
pub fn validate_rating(rating: i16) -> Result<(), String> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        ));
    }
    Ok(())
}

/// Validate the actor ID list of a create request.
///
/// IDs must be positive and unique. An empty list is allowed.
pub fn validate_actor_ids(actor_ids: &[DbId]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(actor_ids.len());
    for &id in actor_ids {
        if id <= 0 {
            return Err(format!("Actor id must be positive, got {id}"));
        }
        if !seen.insert(id) {
            return Err(format!("Actor id {id} is listed more than once"));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Column a movie listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Title,
    Rating,
    ReleaseDate,
}

impl SortField {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" => Some(SortField::Title),
            "rating" => Some(SortField::Rating),
            "release_date" => Some(SortField::ReleaseDate),
            _ => None,
        }
    }

    /// The `movies` column this field sorts on.
    pub fn column(self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Rating => "rating",
            SortField::ReleaseDate => "release_date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A concrete, valid ordering for movie listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovieOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for MovieOrder {
    /// Highest rated first.
    fn default() -> Self {
        Self {
            field: SortField::Rating,
            direction: SortDirection::Desc,
        }
    }
}

impl MovieOrder {
    /// Resolve raw query values into an ordering.
    ///
    /// Both values must be recognised; otherwise the whole pair falls back to
    /// the default (rating, desc). A half-valid pair is never combined with a
    /// default for the other half.
    pub fn resolve(field: &str, direction: &str) -> Self {
        match (SortField::parse(field), SortDirection::parse(direction)) {
            (Some(field), Some(direction)) => Self { field, direction },
            _ => Self::default(),
        }
    }

    /// `ORDER BY` clause body. Ties break on `movie_id` so listings are stable.
    pub fn sql(&self) -> String {
        format!(
            "{} {}, movie_id ASC",
            self.field.column(),
            self.direction.keyword()
        )
    }
}

// ---------------------------------------------------------------------------
// Searching
// ---------------------------------------------------------------------------

/// Which search the store should run, decided from the two fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieSearch {
    /// Title fragment only; no join.
    Title(String),
    /// Actor name fragment only; joins through `movie_actors`.
    Actor(String),
    /// Both fragments must match the same movie/actor pair.
    ActorAndTitle { actor: String, title: String },
}

impl MovieSearch {
    /// Classify the fragments. Blank fragments count as absent; both absent
    /// is an error.
    pub fn from_fragments(actor: &str, title: &str) -> Result<Self, String> {
        let actor = actor.trim();
        let title = title.trim();
        match (actor.is_empty(), title.is_empty()) {
            (false, false) => Ok(MovieSearch::ActorAndTitle {
                actor: actor.to_string(),
                title: title.to_string(),
            }),
            (true, false) => Ok(MovieSearch::Title(title.to_string())),
            (false, true) => Ok(MovieSearch::Actor(actor.to_string())),
            (true, true) => {
                Err("At least one of actor name or title fragment is required".to_string())
            }
        }
    }
}
