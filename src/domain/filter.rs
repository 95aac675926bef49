//! Filter criteria and the filter engine.
//!
//! [`FilterCriteria`] is a value object: every edit produces a new value through
//! [`FilterCriteria::with_query`] or [`FilterCriteria::with_change`], so clearing one
//! constraint never touches the others. [`apply`] evaluates criteria against a slice of
//! records and is free of side effects.

use crate::domain::movie::Movie;

/// Query text plus optional exact-match constraints.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    query: String,
    year_released: Option<u32>,
    duration_minutes: Option<u32>,
}

/// A single edit to the exact-match constraints of [`FilterCriteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChange {
    SetYear(u32),
    SetDuration(u32),
    ClearYear,
    ClearDuration,
    /// Drops both exact-match constraints. The query is left alone.
    ClearAll,
}

impl FilterCriteria {
    #[must_use]
    pub fn new(
        query: impl Into<String>,
        year_released: Option<u32>,
        duration_minutes: Option<u32>,
    ) -> Self {
        Self {
            query: query.into(),
            year_released,
            duration_minutes,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn year_released(&self) -> Option<u32> {
        self.year_released
    }

    #[must_use]
    pub const fn duration_minutes(&self) -> Option<u32> {
        self.duration_minutes
    }

    /// Returns a copy with the query replaced and both constraints preserved.
    #[must_use]
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self::new(query, self.year_released, self.duration_minutes)
    }

    /// Returns a copy with one constraint edit applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use movie_catalog::domain::{FilterChange, FilterCriteria};
    ///
    /// let criteria = FilterCriteria::default()
    ///     .with_change(FilterChange::SetYear(2021))
    ///     .with_change(FilterChange::SetDuration(155))
    ///     .with_change(FilterChange::ClearYear);
    /// assert_eq!(criteria.year_released(), None);
    /// assert_eq!(criteria.duration_minutes(), Some(155));
    /// ```
    #[must_use]
    pub fn with_change(&self, change: FilterChange) -> Self {
        let (year, duration) = match change {
            FilterChange::SetYear(year) => (Some(year), self.duration_minutes),
            FilterChange::SetDuration(minutes) => (self.year_released, Some(minutes)),
            FilterChange::ClearYear => (None, self.duration_minutes),
            FilterChange::ClearDuration => (self.year_released, None),
            FilterChange::ClearAll => (None, None),
        };
        Self::new(self.query.clone(), year, duration)
    }

    /// Returns `true` when no query text and no constraint is in effect.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.query.trim().is_empty()
            && self.year_released.is_none()
            && self.duration_minutes.is_none()
    }

    /// Evaluates the three conjunctive predicates for one record.
    #[must_use]
    pub fn matches(&self, movie: &Movie) -> bool {
        self.matches_lowered(movie, &self.query.trim().to_lowercase())
    }

    /// `lowered_needle` must be the trimmed, lower-cased query.
    fn matches_lowered(&self, movie: &Movie, lowered_needle: &str) -> bool {
        let title_ok = lowered_needle.is_empty()
            || movie.title().trim().to_lowercase().contains(lowered_needle);
        title_ok
            && self.year_released.map_or(true, |year| year == movie.year_released())
            && self
                .duration_minutes
                .map_or(true, |minutes| minutes == movie.duration_minutes())
    }
}

/// Returns the records matching `criteria`, in collection order.
///
/// A single linear pass with no index. Fine for hand-curated catalogs; cost grows
/// linearly with collection size and every mutation re-runs the full scan.
#[must_use]
pub fn apply(records: &[Movie], criteria: &FilterCriteria) -> Vec<Movie> {
    let _span = tracing::debug_span!("apply_filter",
        total_records = records.len(),
        query_len = criteria.query.len(),
        year = ?criteria.year_released,
        duration = ?criteria.duration_minutes
    )
    .entered();

    let needle = criteria.query.trim().to_lowercase();
    let matches: Vec<Movie> = records
        .iter()
        .filter(|movie| criteria.matches_lowered(movie, &needle))
        .cloned()
        .collect();

    tracing::debug!(matched = matches.len(), "filter applied");
    matches
}
