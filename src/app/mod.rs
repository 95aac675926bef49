//! Application layer: session state and command dispatch.
//!
//! Sits between the console front end (`main.rs` and [`crate::ui`]) and the
//! domain/storage layers.
//!
//! ```text
//! Console input → Command → handle_command → Session mutation → Response → Rendering
//!                                 │
//!                                 └── Storage::save after each mutation
//! ```
//!
//! # Modules
//!
//! - [`command`]: User commands as a tagged enum
//! - [`handler`]: Command dispatch and persistence checkpoints
//! - [`outcome`]: What a command did, for the presentation layer
//! - [`session`]: Collection, criteria and active result set

pub mod command;
pub mod handler;
pub mod outcome;
pub mod session;

pub use command::Command;
pub use handler::handle_command;
pub use outcome::{Outcome, Response};
pub use session::Session;
