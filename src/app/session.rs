//! Session state: the collection, the filter criteria and the derived result set.
//!
//! [`Session`] is the single owner of catalog state for one process run. It keeps the
//! active result set consistent by recomputing it after every change to the collection
//! or to the criteria, so readers never observe a stale view.
//!
//! # State Components
//!
//! - **Collection**: every record, in insertion order
//! - **Criteria**: query plus optional year/duration constraints
//! - **Active results**: records matching the criteria, recomputed eagerly

use crate::domain::{apply, FilterChange, FilterCriteria, Movie, MovieCollection, MovieId};
use crate::storage::Storage;

/// Catalog state for one run of the program.
#[derive(Debug, Clone, Default)]
pub struct Session {
    collection: MovieCollection,
    criteria: FilterCriteria,
    active: Vec<Movie>,
}

impl Session {
    /// Creates a session over `collection` with empty criteria.
    #[must_use]
    pub fn new(collection: MovieCollection) -> Self {
        let mut session = Self {
            collection,
            criteria: FilterCriteria::default(),
            active: Vec::new(),
        };
        session.refresh();
        session
    }

    /// Loads the collection from `storage`, falling back to an empty catalog.
    ///
    /// Returns the session and, when loading failed, a message for the user. No load
    /// error escapes this function.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use movie_catalog::app::Session;
    /// use movie_catalog::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("data.json"))?;
    /// let (session, warning) = Session::open(&storage);
    /// if let Some(message) = warning {
    ///     eprintln!("{message}");
    /// }
    /// println!("{} movies", session.collection().len());
    /// # Ok::<(), movie_catalog::CatalogError>(())
    /// ```
    #[must_use]
    pub fn open(storage: &dyn Storage) -> (Self, Option<String>) {
        let _span = tracing::debug_span!("session_open").entered();

        match storage.load() {
            Ok(records) => {
                tracing::debug!(count = records.len(), "catalog loaded");
                (Self::new(MovieCollection::from_records(records)), None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load catalog, starting empty");
                (
                    Self::default(),
                    Some(format!(
                        "Could not load saved movies ({e}); starting with an empty catalog."
                    )),
                )
            }
        }
    }

    #[must_use]
    pub const fn collection(&self) -> &MovieCollection {
        &self.collection
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Records matching the current criteria, in collection order.
    #[must_use]
    pub fn active_results(&self) -> &[Movie] {
        &self.active
    }

    /// Recomputes the active result set from the collection and criteria.
    pub fn refresh(&mut self) {
        self.active = apply(self.collection.all(), &self.criteria);
    }

    /// Replaces the query, keeping both constraints.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria = self.criteria.with_query(query);
        self.refresh();
    }

    /// Applies one constraint edit.
    pub fn change_filter(&mut self, change: FilterChange) {
        self.criteria = self.criteria.with_change(change);
        self.refresh();
    }

    /// Appends a validated movie.
    pub fn add(&mut self, movie: Movie) {
        self.collection.add(movie);
        self.refresh();
    }

    /// Removes a movie by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`](crate::CatalogError::NotFound) if the id is
    /// not in the collection.
    pub fn remove(&mut self, id: MovieId) -> crate::Result<Movie> {
        let removed = self.collection.remove_by_id(id)?;
        self.refresh();
        Ok(removed)
    }

    /// Maps a 1-based position in the active result set to a movie id.
    ///
    /// Returns `None` for 0 (the "cancel" choice) and for positions past the end.
    #[must_use]
    pub fn resolve_selection(&self, position: usize) -> Option<MovieId> {
        position
            .checked_sub(1)
            .and_then(|index| self.active.get(index))
            .map(Movie::id)
    }

    /// Writes the full collection, never the filtered view.
    ///
    /// # Errors
    ///
    /// Propagates the storage error; in-memory state is untouched either way.
    pub fn persist(&self, storage: &mut dyn Storage) -> crate::Result<()> {
        storage.save(self.collection.all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MovieDraft;

    fn movie(title: &str, year: u32, duration: u32) -> Movie {
        Movie::new(MovieDraft {
            title: title.to_string(),
            director: "D".to_string(),
            screenwriter: "S".to_string(),
            duration_minutes: duration,
            year_released: year,
        })
        .unwrap()
    }

    fn session() -> Session {
        let mut collection = MovieCollection::new();
        collection.add(movie("Dune", 2021, 155));
        collection.add(movie("Dune Part Two", 2024, 166));
        collection.add(movie("Arrival", 2016, 116));
        Session::new(collection)
    }

    fn titles(session: &Session) -> Vec<&str> {
        session.active_results().iter().map(Movie::title).collect()
    }

    #[test]
    fn new_session_shows_everything() {
        assert_eq!(titles(&session()), vec!["Dune", "Dune Part Two", "Arrival"]);
    }

    #[test]
    fn query_and_filters_refresh_results_immediately() {
        let mut session = session();
        session.set_query("dune");
        assert_eq!(titles(&session), vec!["Dune", "Dune Part Two"]);
        session.change_filter(FilterChange::SetYear(2021));
        assert_eq!(titles(&session), vec!["Dune"]);
        session.change_filter(FilterChange::ClearYear);
        assert_eq!(titles(&session), vec!["Dune", "Dune Part Two"]);
        assert_eq!(session.criteria().query(), "dune");
    }

    #[test]
    fn adding_a_matching_movie_shows_up_in_results() {
        let mut session = session();
        session.set_query("dune");
        session.add(movie("Dune Messiah", 2024, 150));
        assert_eq!(titles(&session), vec!["Dune", "Dune Part Two", "Dune Messiah"]);
    }

    #[test]
    fn selection_resolves_against_the_filtered_view() {
        let mut session = session();
        session.set_query("arrival");
        let id = session.resolve_selection(1).unwrap();
        assert_eq!(session.collection().get(id).unwrap().title(), "Arrival");
        assert_eq!(session.resolve_selection(0), None);
        assert_eq!(session.resolve_selection(2), None);
    }

    #[test]
    fn remove_refreshes_and_rejects_stale_ids() {
        let mut session = session();
        let id = session.resolve_selection(2).unwrap();
        session.remove(id).unwrap();
        assert_eq!(titles(&session), vec!["Dune", "Arrival"]);

        let before = session.collection().clone();
        assert!(matches!(session.remove(id), Err(crate::CatalogError::NotFound(_))));
        assert_eq!(session.collection(), &before);
    }
}
