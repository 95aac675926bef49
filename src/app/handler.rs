//! Command dispatch and persistence checkpoints.
//!
//! [`handle_command`] runs one [`Command`] to completion against a [`Session`]: it
//! mutates state, recomputes the result set, saves after mutations, and reports what
//! happened as a [`Response`]. It never returns an error; every failure is terminal to
//! the current command only and is described in the response instead.
//!
//! # Example
//!
//! ```no_run
//! use movie_catalog::app::{handle_command, Command, Session};
//! use movie_catalog::storage::JsonStorage;
//! use std::path::PathBuf;
//!
//! let mut storage = JsonStorage::new(PathBuf::from("data.json"))?;
//! let (mut session, _) = Session::open(&storage);
//! let response = handle_command(&mut session, &mut storage, Command::SetQuery("dune".into()));
//! assert!(!response.is_exit());
//! # Ok::<(), movie_catalog::CatalogError>(())
//! ```

use crate::app::{Command, Outcome, Response, Session};
use crate::domain::{CatalogError, Movie};
use crate::storage::Storage;

/// Runs `command` against `session`, persisting through `storage` where required.
pub fn handle_command(
    session: &mut Session,
    storage: &mut dyn Storage,
    command: Command,
) -> Response {
    let _span = tracing::debug_span!("handle_command", command = ?command).entered();

    match command {
        Command::List => {
            session.refresh();
            Response::new(Outcome::Listed(session.active_results().to_vec()))
        }
        Command::SetQuery(query) => {
            tracing::debug!(query = %query, "query changed");
            session.set_query(query);
            Response::new(Outcome::QueryChanged {
                matches: session.active_results().len(),
            })
        }
        Command::ChangeFilter(change) => {
            tracing::debug!(change = ?change, "filter changed");
            session.change_filter(change);
            Response::new(Outcome::FiltersChanged {
                matches: session.active_results().len(),
            })
        }
        Command::Add(draft) => match Movie::new(draft) {
            Ok(movie) => {
                tracing::debug!(movie_id = %movie.id(), title = %movie.title(), "movie added");
                session.add(movie.clone());
                Response::new(Outcome::Added(movie))
                    .with_persistence_error(persist(session, storage))
            }
            Err(e) => {
                tracing::debug!(error = %e, "movie rejected");
                Response::new(Outcome::Rejected(e.to_string()))
            }
        },
        Command::Remove(id) => match session.remove(id) {
            Ok(movie) => Response::new(Outcome::Removed(movie))
                .with_persistence_error(persist(session, storage)),
            Err(CatalogError::NotFound(id)) => {
                tracing::debug!(movie_id = %id, "remove target not found");
                Response::new(Outcome::NotFound(id))
            }
            Err(e) => {
                tracing::error!(error = %e, "unexpected error during remove");
                Response::new(Outcome::Rejected(e.to_string()))
            }
        },
        Command::Save => {
            Response::new(Outcome::Saved).with_persistence_error(persist(session, storage))
        }
        Command::Exit => {
            tracing::debug!("exit requested");
            Response::new(Outcome::Exit)
        }
    }
}

/// Saves the whole collection, turning a failure into a message for the user.
fn persist(session: &Session, storage: &mut dyn Storage) -> Option<String> {
    match session.persist(storage) {
        Ok(()) => None,
        Err(e) => {
            tracing::warn!(error = %e, "failed to save catalog, keeping in-memory state");
            Some(format!("Changes are kept for this session but could not be saved: {e}"))
        }
    }
}
