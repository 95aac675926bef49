//! movie-catalog: a terminal movie catalog backed by a JSON file.
//!
//! The catalog keeps a list of movies (title, director, screenwriter, duration,
//! release year) and lets the user:
//! - narrow the list with a case-insensitive title search plus exact year and duration filters
//! - add movies with validated fields
//! - remove a movie picked from the currently shown list
//!
//! Every change is written back to the data file right away.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI entry point (main.rs)                          │  ← clap, config, tracing
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Session loop (run)                                 │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ App Layer     │   │ Storage Layer │
//! │ (ui/)         │   │ (app/)        │   │ (storage/)    │
//! │ - Menus       │   │ - Commands    │   │ - JSON I/O    │
//! │ - Prompts     │   │ - Session     │   │ - Atomic save │
//! │ - Cards       │   │ - Responses   │   │ - Backend API │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) & Infrastructure (infrastructure/)│
//! │  - Movie model, filter engine, collection           │
//! │  - Error types, path helpers                        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a rotating JSON file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Defaults, then an optional TOML file, then command-line flags:
//!
//! ```toml
//! # catalog.toml
//! data_file = "~/movies/data.json"
//! trace_level = "debug"
//! trace_file = "/tmp/movie-catalog-otlp.json"
//! ```
//!
//! # Example
//!
//! ```
//! use movie_catalog::{run, Session};
//! use movie_catalog::storage::JsonStorage;
//! use movie_catalog::ui::Console;
//! use std::io::Cursor;
//!
//! let dir = tempfile::tempdir()?;
//! let mut storage = JsonStorage::new(dir.path().join("data.json"))?;
//! let (mut session, _) = Session::open(&storage);
//!
//! let input = "4\nDune\nDenis Villeneuve\nJon Spaihts\n155\n2021\n\n6\n";
//! let mut console = Console::new(Cursor::new(input), Vec::new());
//! run(&mut session, &mut storage, &mut console)?;
//!
//! assert_eq!(session.collection().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_command, Command, Outcome, Response, Session};
pub use domain::{CatalogError, Movie, MovieDraft, MovieId, Result};

use serde::Deserialize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use storage::Storage;
use ui::Console;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON data file holding the catalog. Default: `data.json`.
    pub data_file: PathBuf,

    /// Tracing filter directive, e.g. `debug` or `movie_catalog=trace`.
    ///
    /// `None` means `info`.
    pub trace_level: Option<String>,

    /// Trace output file. `None` places it next to the data file.
    pub trace_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(infrastructure::DEFAULT_DATA_FILE),
            trace_level: None,
            trace_file: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_file: Option<String>,
    trace_level: Option<String>,
    trace_file: Option<String>,
}

impl Config {
    /// Parses a TOML configuration document on top of the defaults.
    ///
    /// Every key is optional; unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] when the document is not valid TOML or has
    /// a key of the wrong type.
    ///
    /// # Example
    ///
    /// ```
    /// use movie_catalog::Config;
    /// use std::path::PathBuf;
    ///
    /// let config = Config::from_toml_str("data_file = \"/srv/movies.json\"")?;
    /// assert_eq!(config.data_file, PathBuf::from("/srv/movies.json"));
    /// assert_eq!(config.trace_level, None);
    /// # Ok::<(), movie_catalog::CatalogError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Self::parse(contents, None)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::parse(&contents, Some(path))
    }

    /// Parses `contents`, naming `origin` in the error message when known.
    fn parse(contents: &str, origin: Option<&Path>) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| {
            CatalogError::Config(match origin {
                Some(path) => format!("{}: {}", path.display(), e.message()),
                None => e.message().to_string(),
            })
        })?;
        Ok(Self::from_parsed(file))
    }

    fn from_parsed(file: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            data_file: file
                .data_file
                .as_deref()
                .map_or(defaults.data_file, infrastructure::expand_tilde),
            trace_level: file.trace_level,
            trace_file: file.trace_file.as_deref().map(infrastructure::expand_tilde),
        }
    }

    /// Applies command-line overrides. `None` keeps the current value.
    #[must_use]
    pub fn with_overrides(mut self, data_file: Option<&str>, trace_level: Option<&str>) -> Self {
        if let Some(path) = data_file {
            self.data_file = infrastructure::expand_tilde(path);
        }
        if let Some(level) = trace_level {
            self.trace_level = Some(level.to_string());
        }
        self
    }
}

/// Runs the interactive menu loop until the user exits or input ends.
///
/// Each round reads one command, runs it through [`handle_command`], prints the
/// response and waits for Enter. Closing the input stream ends the loop cleanly.
/// If the last change could not be saved, one more save is attempted on the way out.
///
/// # Errors
///
/// Returns an error only when reading or writing the console fails for a reason
/// other than end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    storage: &mut dyn Storage,
    console: &mut Console<R, W>,
) -> Result<()> {
    let _span = tracing::debug_span!("session", movies = session.collection().len()).entered();
    let mut unsaved = false;

    loop {
        let command = match console.next_command(session) {
            Ok(command) => command,
            Err(e) if e.is_end_of_input() => {
                tracing::debug!("input closed");
                break;
            }
            Err(e) => return Err(e),
        };

        if let Some(command) = command {
            let mutates = command.mutates_collection();
            let response = handle_command(session, storage, command);
            console.show(&response)?;
            if response.is_exit() {
                break;
            }
            if mutates {
                unsaved = response.persistence_error.is_some();
            }
        }

        match console.pause() {
            Ok(()) => {}
            Err(e) if e.is_end_of_input() => break,
            Err(e) => return Err(e),
        }
    }

    if unsaved {
        tracing::warn!("retrying save before exit");
        let response = handle_command(session, storage, Command::Save);
        console.show(&response)?;
    }
    Ok(())
}
