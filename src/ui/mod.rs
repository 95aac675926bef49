//! Terminal presentation layer.
//!
//! # Modules
//!
//! - [`console`]: Menu flow turning user input into commands
//! - [`prompt`]: Validated line input with re-prompting
//! - [`renderer`]: Text output for menus, movie cards and responses
//! - [`viewmodel`]: Display-ready formatting of domain values

pub mod console;
pub mod prompt;
pub mod renderer;
pub mod viewmodel;

pub use console::{Console, MenuChoice};
pub use prompt::Prompter;
