//! Tracing pipeline with file-based span export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → TracerProvider → FileSpanExporter → rotating JSON file
//! ```
//!
//! Each finished span is written as one JSON object per line. The file rotates at
//! 10 MiB and keeps three numbered backups (`.1` newest, `.3` oldest).
//!
//! ```no_run
//! use movie_catalog::observability::init_tracing;
//! use movie_catalog::Config;
//!
//! init_tracing(&Config::default());
//! tracing::info!("catalog started");
//! ```

mod exporter;
mod file_writer;
mod init;
mod span_record;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};
