//! Display-ready representations of catalog state.
//!
//! View models are computed from domain values and contain no logic beyond
//! formatting; the renderer only prints them.

use crate::domain::{FilterCriteria, Movie};

const MINUTES_PER_HOUR: u32 = 60;

/// One movie formatted for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    /// Position in a numbered listing, starting at 1.
    pub number: Option<usize>,
    pub title: String,
    pub director: String,
    pub screenwriter: String,
    /// Running time as hours and minutes, e.g. `2 h 35 min`.
    pub duration: String,
    pub year: u32,
}

impl MovieCard {
    #[must_use]
    pub fn from_movie(movie: &Movie, number: Option<usize>) -> Self {
        Self {
            number,
            title: movie.title().to_string(),
            director: movie.director().to_string(),
            screenwriter: movie.screenwriter().to_string(),
            duration: format_duration(movie.duration_minutes()),
            year: movie.year_released(),
        }
    }

    /// Builds cards for a listing, numbering them from 1 when `numbered` is set.
    #[must_use]
    pub fn list(movies: &[Movie], numbered: bool) -> Vec<Self> {
        movies
            .iter()
            .enumerate()
            .map(|(idx, movie)| Self::from_movie(movie, numbered.then_some(idx + 1)))
            .collect()
    }
}

/// Formats a running time in minutes as `H h M min`.
#[must_use]
pub fn format_duration(minutes: u32) -> String {
    format!(
        "{} h {} min",
        minutes / MINUTES_PER_HOUR,
        minutes % MINUTES_PER_HOUR
    )
}

/// One-line summary of the active query and constraints.
#[must_use]
pub fn criteria_summary(criteria: &FilterCriteria) -> String {
    if criteria.is_unconstrained() {
        return "Showing all movies".to_string();
    }

    let mut parts = Vec::new();
    if !criteria.query().trim().is_empty() {
        parts.push(format!("title contains \"{}\"", criteria.query().trim()));
    }
    if let Some(year) = criteria.year_released() {
        parts.push(format!("year = {year}"));
    }
    if let Some(minutes) = criteria.duration_minutes() {
        parts.push(format!("duration = {}", format_duration(minutes)));
    }
    format!("Filtering: {}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FilterChange, MovieDraft};

    #[test]
    fn duration_splits_into_hours_and_minutes() {
        assert_eq!(format_duration(155), "2 h 35 min");
        assert_eq!(format_duration(3), "0 h 3 min");
        assert_eq!(format_duration(120), "2 h 0 min");
    }

    #[test]
    fn listing_numbers_from_one() {
        let movie = Movie::new(MovieDraft {
            title: "Heat".into(),
            director: "Michael Mann".into(),
            screenwriter: "Michael Mann".into(),
            duration_minutes: 170,
            year_released: 1995,
        })
        .unwrap();
        let cards = MovieCard::list(&[movie.clone(), movie], true);
        assert_eq!(cards[0].number, Some(1));
        assert_eq!(cards[1].number, Some(2));
        assert_eq!(cards[0].duration, "2 h 50 min");
        assert!(MovieCard::list(&cards_source(), false).iter().all(|c| c.number.is_none()));
    }

    fn cards_source() -> Vec<Movie> {
        vec![Movie::new(MovieDraft {
            title: "Ronin".into(),
            director: "John Frankenheimer".into(),
            screenwriter: "J. D. Zeik".into(),
            duration_minutes: 122,
            year_released: 1998,
        })
        .unwrap()]
    }

    #[test]
    fn summary_lists_only_active_constraints() {
        assert_eq!(criteria_summary(&FilterCriteria::default()), "Showing all movies");
        let criteria =
            FilterCriteria::new(" dune ", None, None).with_change(FilterChange::SetDuration(155));
        assert_eq!(
            criteria_summary(&criteria),
            "Filtering: title contains \"dune\", duration = 2 h 35 min"
        );
    }
}
