//! Storage layer for the persistent movie catalog.
//!
//! # Modules
//!
//! - `backend`: [`Storage`] trait consumed by the session
//! - `json`: JSON file implementation with atomic writes
//! - `models`: On-disk record and envelope types

pub mod backend;
pub mod json;
pub mod models;

pub use backend::Storage;
pub use json::JsonStorage;
pub use models::{MovieRecord, StorageData, STORAGE_VERSION};
