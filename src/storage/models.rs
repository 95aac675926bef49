//! Storage record models for the persistence layer.
//!
//! These types mirror the on-disk JSON layout and are kept separate from the domain
//! [`Movie`] so that the file format can carry values the domain would reject. Every
//! record goes through [`Movie::restore`] on the way in.

use crate::domain::error::{CatalogError, Result};
use crate::domain::{Movie, MovieDraft, MovieId};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Current version written into the file envelope.
pub const STORAGE_VERSION: u32 = 1;

/// One movie as stored on disk.
///
/// Field names match the data files written by earlier releases, which is why the
/// running time is stored under `duration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Record id as hyphenated UUID text.
    pub id: String,
    pub title: String,
    pub director: String,
    pub screenwriter: String,
    /// Running time in minutes.
    pub duration: i64,
    pub year_released: i64,
}

impl From<&Movie> for MovieRecord {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id().to_string(),
            title: movie.title().to_string(),
            director: movie.director().to_string(),
            screenwriter: movie.screenwriter().to_string(),
            duration: i64::from(movie.duration_minutes()),
            year_released: i64::from(movie.year_released()),
        }
    }
}

impl TryFrom<MovieRecord> for Movie {
    type Error = CatalogError;

    fn try_from(record: MovieRecord) -> Result<Self> {
        let id: MovieId = record.id.parse()?;
        let duration_minutes = out_of_u32("duration_minutes", record.duration)?;
        let year_released = out_of_u32("year_released", record.year_released)?;
        Self::restore(
            id,
            MovieDraft {
                title: record.title,
                director: record.director,
                screenwriter: record.screenwriter,
                duration_minutes,
                year_released,
            },
        )
    }
}

fn out_of_u32(field: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| CatalogError::Validation {
        field,
        reason: format!("{value} is not a valid value"),
    })
}

/// Versioned top-level file structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageData {
    /// Version of the storage format.
    pub version: u32,

    #[serde(default)]
    pub movies: Vec<MovieRecord>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            movies: Vec::new(),
        }
    }
}

/// Any file layout the loader understands, with records still untyped.
///
/// Files written before the envelope existed hold a bare array of records. Records
/// stay as raw JSON here so that one malformed entry can be skipped on its own
/// instead of failing the whole file.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredCatalog {
    /// Envelope version, `0` for the bare-array layout.
    pub version: u32,
    pub records: Vec<JsonValue>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    version: u32,
    #[serde(default)]
    movies: Vec<JsonValue>,
}

impl StoredCatalog {
    /// Recognizes the top-level layout of an already parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Storage`] when the document is neither an array nor
    /// an envelope object with a numeric `version` and an array of `movies`.
    pub fn from_json(document: JsonValue) -> Result<Self> {
        match document {
            JsonValue::Array(records) => Ok(Self { version: 0, records }),
            envelope @ JsonValue::Object(_) => {
                let raw: RawEnvelope = serde_json::from_value(envelope)
                    .map_err(|e| CatalogError::Storage(format!("invalid file envelope: {e}")))?;
                Ok(Self {
                    version: raw.version,
                    records: raw.movies,
                })
            }
            _ => Err(CatalogError::Storage(
                "expected an object or an array at the top level".to_string(),
            )),
        }
    }
}

/// Decodes one raw stored record into a validated movie.
///
/// # Errors
///
/// Returns [`CatalogError::Storage`] for a record of the wrong shape (missing
/// field, mistyped value) and [`CatalogError::Validation`] for values the domain
/// rejects.
pub fn decode_record(raw: JsonValue) -> Result<Movie> {
    let record: MovieRecord = serde_json::from_value(raw)
        .map_err(|e| CatalogError::Storage(format!("malformed record: {e}")))?;
    Movie::try_from(record)
}
