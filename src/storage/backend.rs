//! Storage backend abstraction.
//!
//! The [`Storage`] trait is the persistence gateway consumed by the session: load the
//! whole catalog once, save the whole catalog after each mutation. It is deliberately
//! not a record-level API; filters are a view concern and never reach storage.

use crate::domain::error::Result;
use crate::domain::Movie;

/// Durable load/save of the full movie collection.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes
///
/// # Examples
///
/// ```no_run
/// use movie_catalog::storage::{JsonStorage, Storage};
/// use std::path::PathBuf;
///
/// let mut storage = JsonStorage::new(PathBuf::from("/tmp/movies.json"))?;
/// let movies = storage.load()?;
/// storage.save(&movies)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Storage {
    /// Reads every stored record in stored order.
    ///
    /// Returns an empty list when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store exists but cannot be read or parsed.
    fn load(&self) -> Result<Vec<Movie>>;

    /// Replaces the stored contents with `movies`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The caller keeps its in-memory state.
    fn save(&mut self, movies: &[Movie]) -> Result<()>;
}
