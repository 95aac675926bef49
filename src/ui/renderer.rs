//! Plain-text rendering of menus, movie listings and command responses.
//!
//! Every function writes to a caller-supplied sink so the same code serves stdout
//! and in-memory buffers in tests.

use crate::app::{Outcome, Response};
use crate::domain::{FilterCriteria, Movie};
use crate::ui::viewmodel::{criteria_summary, MovieCard};
use std::io::{self, Write};

/// Extra dashes around the title in a card banner.
const BANNER_PADDING: usize = 18;

/// Prints the main menu with the active criteria above it.
pub fn render_main_menu<W: Write>(
    out: &mut W,
    criteria: &FilterCriteria,
    total: usize,
    shown: usize,
) -> io::Result<()> {
    writeln!(out, "*----------- MOVIES -----------*")?;
    writeln!(out, "{} ({shown} of {total})", criteria_summary(criteria))?;
    writeln!(out, "1) Show found movies")?;
    writeln!(out, "2) Search by title")?;
    writeln!(out, "3) Filter by release year and duration")?;
    writeln!(out, "4) Add a movie")?;
    writeln!(out, "5) Remove a movie")?;
    writeln!(out, "6) Exit")
}

pub fn render_filter_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "1) Set year filter")?;
    writeln!(out, "2) Set duration filter")?;
    writeln!(out, "3) Clear year filter")?;
    writeln!(out, "4) Clear duration filter")?;
    writeln!(out, "5) Clear all filters")
}

/// Prints movies as cards, optionally numbered for selection.
pub fn render_movies<W: Write>(out: &mut W, movies: &[Movie], numbered: bool) -> io::Result<()> {
    if movies.is_empty() {
        return writeln!(out, "No movies found!");
    }

    writeln!(out)?;
    for card in MovieCard::list(movies, numbered) {
        render_card(out, &card)?;
    }
    Ok(())
}

fn render_card<W: Write>(out: &mut W, card: &MovieCard) -> io::Result<()> {
    writeln!(out, "-------- {} --------", card.title)?;
    if let Some(number) = card.number {
        writeln!(out, "Movie #{number}")?;
    }
    writeln!(out, "Director: {}", card.director)?;
    writeln!(out, "Screenwriter: {}", card.screenwriter)?;
    writeln!(out, "Duration: {}", card.duration)?;
    writeln!(out, "Released: {}", card.year)?;
    writeln!(out, "{}", "-".repeat(card.title.chars().count() + BANNER_PADDING))?;
    writeln!(out)
}

/// Prints what a command did, followed by any persistence failure.
pub fn render_response<W: Write>(out: &mut W, response: &Response) -> io::Result<()> {
    match &response.outcome {
        Outcome::Listed(movies) => render_movies(out, movies, false)?,
        Outcome::QueryChanged { matches } => {
            writeln!(out, "Search updated, {matches} movie(s) match.")?;
        }
        Outcome::FiltersChanged { matches } => {
            writeln!(out, "Filters updated, {matches} movie(s) match.")?;
        }
        Outcome::Added(movie) => writeln!(out, "Movie \"{}\" was added!", movie.title())?,
        Outcome::Rejected(reason) => writeln!(out, "Movie was not added: {reason}")?,
        Outcome::Removed(movie) => writeln!(out, "Movie \"{}\" was removed!", movie.title())?,
        Outcome::NotFound(_) => writeln!(
            out,
            "That movie is no longer in the catalog, nothing was removed."
        )?,
        Outcome::Saved => {
            if response.persistence_error.is_none() {
                writeln!(out, "Catalog saved.")?;
            }
        }
        Outcome::Exit => writeln!(out, "Goodbye!")?,
    }

    if let Some(error) = &response.persistence_error {
        writeln!(out, "Warning: {error}")?;
    }
    Ok(())
}
