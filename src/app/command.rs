//! Commands a user can issue to the session.
//!
//! Each variant carries everything the handler needs, so dispatch is a plain `match`
//! with no inspection of menu tables at runtime. The presentation layer builds a
//! [`Command`] from console input; [`handle_command`](crate::app::handle_command) runs it.

use crate::domain::{FilterChange, MovieDraft, MovieId};

/// One user-requested action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the current result set.
    List,

    /// Replace the title query. An empty string matches every title.
    SetQuery(String),

    /// Edit one exact-match constraint, or clear both.
    ChangeFilter(FilterChange),

    /// Validate and append a new movie.
    Add(MovieDraft),

    /// Remove the movie with this id.
    ///
    /// Build it with [`Session::resolve_selection`](crate::app::Session::resolve_selection)
    /// so that a position in the displayed list is turned into an id before anything
    /// else can reorder the collection.
    Remove(MovieId),

    /// Write the full collection to storage.
    Save,

    /// Leave the session loop.
    Exit,
}

impl Command {
    /// Returns `true` for commands that change the collection and therefore persist.
    #[must_use]
    pub const fn mutates_collection(&self) -> bool {
        matches!(self, Self::Add(_) | Self::Remove(_))
    }
}
