//! The authoritative ordered list of movie records.
//!
//! [`MovieCollection`] knows nothing about filters. Any `add` or `remove_by_id` leaves a
//! previously computed result set stale; recomputing it is the session's job.

use crate::domain::error::{CatalogError, Result};
use crate::domain::movie::{Movie, MovieId};
use std::collections::HashSet;

/// Ordered store of movie records keyed by [`MovieId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieCollection {
    movies: Vec<Movie>,
}

impl MovieCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from records read back from storage.
    ///
    /// A record whose id repeats an earlier one is dropped so that ids stay unique.
    #[must_use]
    pub fn from_records(records: Vec<Movie>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let movies = records
            .into_iter()
            .filter(|movie| {
                let fresh = seen.insert(movie.id());
                if !fresh {
                    tracing::warn!(
                        movie_id = %movie.id(),
                        title = %movie.title(),
                        "dropping record with duplicate id"
                    );
                }
                fresh
            })
            .collect();
        Self { movies }
    }

    /// Appends a record. Duplicate titles are allowed.
    pub fn add(&mut self, movie: Movie) {
        tracing::debug!(movie_id = %movie.id(), title = %movie.title(), "appending movie");
        self.movies.push(movie);
    }

    /// Removes the record with the given id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no record has this id; the collection is
    /// left unchanged.
    pub fn remove_by_id(&mut self, id: MovieId) -> Result<Movie> {
        let position = self
            .movies
            .iter()
            .position(|movie| movie.id() == id)
            .ok_or(CatalogError::NotFound(id))?;
        let removed = self.movies.remove(position);
        tracing::debug!(movie_id = %id, title = %removed.title(), "movie removed");
        Ok(removed)
    }

    #[must_use]
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id() == id)
    }

    /// Read-only view of every record in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
