//! Movie record model and field constraints.
//!
//! A [`Movie`] is only ever built through [`Movie::new`] (fresh record, fresh id) or
//! [`Movie::restore`] (record read back from storage, persisted id). Both paths run the
//! same validation, so every `Movie` in memory satisfies the field ranges below. Records
//! are never edited in place.

use crate::domain::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use uuid::Uuid;

/// Allowed running time in minutes.
pub const DURATION_RANGE: RangeInclusive<u32> = 3..=873;

/// Allowed release years.
pub const YEAR_RANGE: RangeInclusive<u32> = 1902..=2024;

/// Opaque unique identifier of a movie record.
///
/// Backed by a random UUID, so ids are never reused across add/remove cycles or
/// across sessions. Serialized as its hyphenated text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(Uuid);

impl MovieId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for MovieId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| CatalogError::Validation {
                field: "id",
                reason: format!("not a valid identifier ({e})"),
            })
    }
}

/// Unvalidated field values for a movie, as collected from the user or from storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovieDraft {
    pub title: String,
    pub director: String,
    pub screenwriter: String,
    pub duration_minutes: u32,
    pub year_released: u32,
}

/// A validated movie record.
///
/// # Examples
///
/// ```
/// use movie_catalog::domain::{Movie, MovieDraft};
///
/// let movie = Movie::new(MovieDraft {
///     title: "  Dune ".to_string(),
///     director: "Denis Villeneuve".to_string(),
///     screenwriter: "Jon Spaihts".to_string(),
///     duration_minutes: 155,
///     year_released: 2021,
/// })?;
/// assert_eq!(movie.title(), "Dune");
/// # Ok::<(), movie_catalog::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    id: MovieId,
    title: String,
    director: String,
    screenwriter: String,
    duration_minutes: u32,
    year_released: u32,
}

impl Movie {
    /// Validates `draft` and creates a record with a freshly generated id.
    ///
    /// Text fields are trimmed before the emptiness check.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] for an empty text field or an integer
    /// outside [`DURATION_RANGE`] / [`YEAR_RANGE`].
    pub fn new(draft: MovieDraft) -> Result<Self> {
        Self::restore(MovieId::generate(), draft)
    }

    /// Rebuilds a record with a known id, applying the same validation as [`Movie::new`].
    ///
    /// # Errors
    ///
    /// Same as [`Movie::new`].
    pub fn restore(id: MovieId, draft: MovieDraft) -> Result<Self> {
        Ok(Self {
            id,
            title: required_text("title", &draft.title)?,
            director: required_text("director", &draft.director)?,
            screenwriter: required_text("screenwriter", &draft.screenwriter)?,
            duration_minutes: within("duration_minutes", draft.duration_minutes, &DURATION_RANGE)?,
            year_released: within("year_released", draft.year_released, &YEAR_RANGE)?,
        })
    }

    #[must_use]
    pub const fn id(&self) -> MovieId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn director(&self) -> &str {
        &self.director
    }

    #[must_use]
    pub fn screenwriter(&self) -> &str {
        &self.screenwriter
    }

    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub const fn year_released(&self) -> u32 {
        self.year_released
    }
}

fn required_text(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::Validation {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn within(field: &'static str, value: u32, range: &RangeInclusive<u32>) -> Result<u32> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(CatalogError::Validation {
            field,
            reason: format!(
                "must be between {} and {}, got {value}",
                range.start(),
                range.end()
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn draft() -> MovieDraft {
        MovieDraft {
            title: "Dune".to_string(),
            director: "Denis Villeneuve".to_string(),
            screenwriter: "Jon Spaihts".to_string(),
            duration_minutes: 155,
            year_released: 2021,
        }
    }

    #[test]
    fn new_trims_text_fields() {
        let movie = Movie::new(MovieDraft {
            title: "  Arrival \n".to_string(),
            ..draft()
        })
        .unwrap();
        assert_eq!(movie.title(), "Arrival");
        assert_eq!(movie.director(), "Denis Villeneuve");
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = Movie::new(MovieDraft {
            screenwriter: "   ".to_string(),
            ..draft()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation { field: "screenwriter", .. }
        ));
    }

    #[test]
    fn duration_bounds_are_inclusive() {
        for ok in [3, 873] {
            assert!(Movie::new(MovieDraft { duration_minutes: ok, ..draft() }).is_ok());
        }
        for bad in [0, 2, 874] {
            let err = Movie::new(MovieDraft { duration_minutes: bad, ..draft() }).unwrap_err();
            assert!(matches!(
                err,
                CatalogError::Validation { field: "duration_minutes", .. }
            ));
        }
    }

    #[test]
    fn year_bounds_are_inclusive() {
        assert!(Movie::new(MovieDraft { year_released: 1902, ..draft() }).is_ok());
        assert!(Movie::new(MovieDraft { year_released: 2024, ..draft() }).is_ok());
        assert!(Movie::new(MovieDraft { year_released: 1901, ..draft() }).is_err());
        assert!(Movie::new(MovieDraft { year_released: 2025, ..draft() }).is_err());
    }

    #[test]
    fn every_new_movie_gets_a_distinct_id() {
        let ids: HashSet<MovieId> = (0..100)
            .map(|_| Movie::new(draft()).unwrap().id())
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn restore_keeps_the_given_id() {
        let id = MovieId::generate();
        let movie = Movie::restore(id, draft()).unwrap();
        assert_eq!(movie.id(), id);
    }

    #[test]
    fn id_text_form_parses_back() {
        let id = MovieId::generate();
        let parsed: MovieId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<MovieId>().is_err());
    }
}
