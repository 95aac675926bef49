//! Infrastructure layer for filesystem and environment interactions.

pub mod paths;

pub use paths::{data_dir, default_trace_file, expand_tilde, DEFAULT_DATA_FILE};
