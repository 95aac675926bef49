//! Domain layer for the movie catalog.
//!
//! Holds the record model, the filter engine and the collection store. Nothing in here
//! touches the filesystem or the console.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Movie record, id and field constraints
//! - [`filter`]: Filter criteria value object and the filter engine
//! - [`collection`]: Ordered record store with id-based removal
//!
//! # Examples
//!
//! ```
//! use movie_catalog::domain::{apply, FilterCriteria, Movie, MovieCollection, MovieDraft};
//!
//! let mut collection = MovieCollection::new();
//! collection.add(Movie::new(MovieDraft {
//!     title: "Dune".to_string(),
//!     director: "Denis Villeneuve".to_string(),
//!     screenwriter: "Jon Spaihts".to_string(),
//!     duration_minutes: 155,
//!     year_released: 2021,
//! })?);
//!
//! let found = apply(collection.all(), &FilterCriteria::new("dune", Some(2021), None));
//! assert_eq!(found.len(), 1);
//! # Ok::<(), movie_catalog::CatalogError>(())
//! ```

pub mod collection;
pub mod error;
pub mod filter;
pub mod movie;

pub use collection::MovieCollection;
pub use error::{CatalogError, Result};
pub use filter::{apply, FilterChange, FilterCriteria};
pub use movie::{Movie, MovieDraft, MovieId, DURATION_RANGE, YEAR_RANGE};
