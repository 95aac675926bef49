//! Results of running a command, handed back to the presentation layer.

use crate::domain::{Movie, MovieId};

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The current result set, in collection order.
    Listed(Vec<Movie>),

    /// The query was replaced; `matches` is the size of the new result set.
    QueryChanged { matches: usize },

    /// A constraint was edited; `matches` is the size of the new result set.
    FiltersChanged { matches: usize },

    /// The movie was validated and appended.
    Added(Movie),

    /// The draft failed validation; the collection is unchanged.
    Rejected(String),

    /// The movie was removed from the collection.
    Removed(Movie),

    /// No movie with this id exists any more; nothing was removed.
    NotFound(MovieId),

    /// A save was attempted; see [`Response::persistence_error`].
    Saved,

    /// The loop should stop.
    Exit,
}

/// Outcome plus any persistence failure that happened along the way.
///
/// A failed save never undoes the in-memory change that triggered it, so the
/// outcome stays accurate for the running session even when
/// `persistence_error` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub outcome: Outcome,
    pub persistence_error: Option<String>,
}

impl Response {
    #[must_use]
    pub const fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            persistence_error: None,
        }
    }

    #[must_use]
    pub fn with_persistence_error(mut self, error: Option<String>) -> Self {
        self.persistence_error = error;
        self
    }

    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self.outcome, Outcome::Exit)
    }
}
