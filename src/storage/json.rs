//! JSON file-based storage backend.
//!
//! Keeps the whole catalog in a single human-readable JSON file. Writes go to a
//! temporary sibling file first and are then renamed over the target, so a crash
//! mid-save leaves the previous catalog intact.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(n), whole file parsed once per session
//! - **Write**: O(n), whole catalog serialized on every save
//! - **Best for**: hand-curated catalogs of a few thousand records

use crate::domain::error::{CatalogError, Result};
use crate::domain::Movie;
use crate::storage::backend::Storage;
use crate::storage::models::{
    decode_record, MovieRecord, StorageData, StoredCatalog, STORAGE_VERSION,
};
use std::path::{Path, PathBuf};

/// JSON file storage backend.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "movies": [
///     {
///       "id": "0b7e7dee-87ac-4c52-a5f4-63f2e1c9b0c1",
///       "title": "Solaris",
///       "director": "Andrei Tarkovsky",
///       "screenwriter": "Fridrikh Gorenshtein",
///       "duration": 167,
///       "year_released": 1972
///     }
///   ]
/// }
/// ```
///
/// A bare array of the same record objects is also accepted on load.
#[derive(Debug)]
pub struct JsonStorage {
    file_path: PathBuf,
}

impl JsonStorage {
    /// Opens a JSON storage backend at `file_path`, creating parent directories.
    ///
    /// The file itself is not created until the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tracing::debug!(parent = ?parent, "creating parent directory");
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn parse(contents: &str) -> Result<Vec<Movie>> {
        let document: serde_json::Value = serde_json::from_str(contents)
            .map_err(|e| CatalogError::Storage(format!("failed to parse JSON: {e}")))?;
        let StoredCatalog { version, records } = StoredCatalog::from_json(document)?;

        if version > STORAGE_VERSION {
            return Err(CatalogError::Storage(format!(
                "unsupported storage version {version} (newest known is {STORAGE_VERSION})"
            )));
        }

        let total = records.len();
        let movies: Vec<Movie> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                decode_record(raw)
                    .map_err(|e| {
                        tracing::warn!(index, error = %e, "skipping invalid stored record");
                    })
                    .ok()
            })
            .collect();

        tracing::debug!(
            version = version,
            stored = total,
            loaded = movies.len(),
            "loaded storage data"
        );
        Ok(movies)
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<Vec<Movie>> {
        let _span = tracing::debug_span!("json_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no data file yet, starting empty");
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        Self::parse(&contents)
    }

    fn save(&mut self, movies: &[Movie]) -> Result<()> {
        let _span = tracing::debug_span!("json_save",
            path = ?self.file_path,
            count = movies.len()
        ).entered();

        let data = StorageData {
            version: STORAGE_VERSION,
            movies: movies.iter().map(MovieRecord::from).collect(),
        };
        let json = serde_json::to_string_pretty(&data)
            .map_err(|e| CatalogError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("storage saved successfully");
        Ok(())
    }
}
