//! Interactive menu front end.
//!
//! [`Console`] turns menu choices and prompt answers into [`Command`] values and
//! prints [`Response`]s. It holds no catalog state of its own; it only reads the
//! session to show the current criteria and to resolve a removal selection to an id.

use crate::app::{Command, Response, Session};
use crate::domain::error::Result;
use crate::domain::{FilterChange, MovieDraft, DURATION_RANGE, YEAR_RANGE};
use crate::ui::prompt::Prompter;
use crate::ui::renderer;
use std::io::{BufRead, Write};

/// Longest duration filter accepted, in whole hours.
const MAX_FILTER_HOURS: u32 = 14;

/// Entries of the main menu, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List = 1,
    Search = 2,
    Filter = 3,
    Add = 4,
    Remove = 5,
    Exit = 6,
}

impl MenuChoice {
    #[must_use]
    pub const fn from_number(number: u32) -> Option<Self> {
        Some(match number {
            1 => Self::List,
            2 => Self::Search,
            3 => Self::Filter,
            4 => Self::Add,
            5 => Self::Remove,
            6 => Self::Exit,
            _ => return None,
        })
    }
}

/// Console front end over any reader/writer pair.
#[derive(Debug)]
pub struct Console<R, W> {
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            prompter: Prompter::new(input, output),
        }
    }

    /// Consumes the console and returns the output sink.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Prints a free-form line, e.g. a startup warning.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.prompter.output(), "{message}")?;
        Ok(())
    }

    /// Shows the main menu and collects one command.
    ///
    /// Returns `Ok(None)` when the user backs out of a sub-prompt (for example
    /// choosing 0 in the removal list), in which case nothing should run.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or end of input.
    pub fn next_command(&mut self, session: &Session) -> Result<Option<Command>> {
        renderer::render_main_menu(
            self.prompter.output(),
            session.criteria(),
            session.collection().len(),
            session.active_results().len(),
        )?;

        let number = self.prompter.integer_in("Choose an action: ", 1..=6)?;
        let Some(choice) = MenuChoice::from_number(number) else {
            return Ok(None);
        };
        tracing::debug!(choice = ?choice, "menu choice");

        match choice {
            MenuChoice::List => Ok(Some(Command::List)),
            MenuChoice::Search => {
                let query = self.prompter.line("Find (leave empty to reset): ")?;
                Ok(Some(Command::SetQuery(query.trim().to_string())))
            }
            MenuChoice::Filter => self
                .filter_change()
                .map(|change| Some(Command::ChangeFilter(change))),
            MenuChoice::Add => self.movie_draft().map(|draft| Some(Command::Add(draft))),
            MenuChoice::Remove => self.removal(session),
            MenuChoice::Exit => Ok(Some(Command::Exit)),
        }
    }

    /// Prints the result of a command.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn show(&mut self, response: &Response) -> Result<()> {
        renderer::render_response(self.prompter.output(), response)?;
        Ok(())
    }

    /// Waits for Enter before the menu is drawn again.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or end of input.
    pub fn pause(&mut self) -> Result<()> {
        self.prompter.pause()
    }

    fn filter_change(&mut self) -> Result<FilterChange> {
        renderer::render_filter_menu(self.prompter.output())?;
        let change = match self.prompter.integer_in("Choose an action: ", 1..=5)? {
            1 => FilterChange::SetYear(self.prompter.integer_in("Release year: ", YEAR_RANGE)?),
            2 => {
                let hours = self.prompter.integer_in("Hours: ", 0..=MAX_FILTER_HOURS)?;
                let minutes = self.prompter.integer_in("Minutes: ", 0..=59)?;
                // 0 h 0 min means "any duration"
                match hours * 60 + minutes {
                    0 => FilterChange::ClearDuration,
                    total => FilterChange::SetDuration(total),
                }
            }
            3 => FilterChange::ClearYear,
            4 => FilterChange::ClearDuration,
            _ => FilterChange::ClearAll,
        };
        Ok(change)
    }

    fn movie_draft(&mut self) -> Result<MovieDraft> {
        Ok(MovieDraft {
            title: self.prompter.required_text("Title: ")?,
            director: self.prompter.required_text("Director: ")?,
            screenwriter: self.prompter.required_text("Screenwriter: ")?,
            duration_minutes: self.prompter.integer_in("Duration (minutes): ", DURATION_RANGE)?,
            year_released: self.prompter.integer_in("Release year: ", YEAR_RANGE)?,
        })
    }

    fn removal(&mut self, session: &Session) -> Result<Option<Command>> {
        let shown = session.active_results();
        renderer::render_movies(self.prompter.output(), shown, true)?;
        if shown.is_empty() {
            return Ok(None);
        }

        let upper = u32::try_from(shown.len()).unwrap_or(u32::MAX);
        let number = self
            .prompter
            .integer_in("Number of the movie to remove (0 to cancel): ", 0..=upper)?;

        Ok(usize::try_from(number)
            .ok()
            .and_then(|position| session.resolve_selection(position))
            .map(Command::Remove))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Movie, MovieCollection};
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn session() -> Session {
        let mut collection = MovieCollection::new();
        for (title, year) in [("Dune", 2021), ("Arrival", 2016)] {
            collection.add(
                Movie::new(MovieDraft {
                    title: title.into(),
                    director: "Denis Villeneuve".into(),
                    screenwriter: "Eric Heisserer".into(),
                    duration_minutes: 120,
                    year_released: year,
                })
                .unwrap(),
            );
        }
        Session::new(collection)
    }

    #[test]
    fn menu_numbers_map_to_choices() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::List));
        assert_eq!(MenuChoice::from_number(6), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(7), None);
    }

    #[test]
    fn search_collects_trimmed_query() {
        let mut c = console("2\n  Dune  \n");
        assert_eq!(
            c.next_command(&session()).unwrap(),
            Some(Command::SetQuery("Dune".into()))
        );
    }

    #[test]
    fn duration_filter_is_entered_as_hours_and_minutes() {
        let mut c = console("3\n2\n2\n35\n");
        assert_eq!(
            c.next_command(&session()).unwrap(),
            Some(Command::ChangeFilter(FilterChange::SetDuration(155)))
        );
    }

    #[test]
    fn zero_duration_filter_clears_the_constraint() {
        let mut c = console("3\n2\n0\n0\n");
        assert_eq!(
            c.next_command(&session()).unwrap(),
            Some(Command::ChangeFilter(FilterChange::ClearDuration))
        );
    }

    #[test]
    fn filter_menu_clear_options() {
        for (input, expected) in [
            ("3\n3\n", FilterChange::ClearYear),
            ("3\n4\n", FilterChange::ClearDuration),
            ("3\n5\n", FilterChange::ClearAll),
        ] {
            let mut c = console(input);
            assert_eq!(
                c.next_command(&session()).unwrap(),
                Some(Command::ChangeFilter(expected))
            );
        }
    }

    #[test]
    fn add_reprompts_until_values_are_valid() {
        let mut c = console("4\nHeat\n\nMichael Mann\nMichael Mann\n2\n170\n1995\n");
        let Some(Command::Add(draft)) = c.next_command(&session()).unwrap() else {
            panic!("expected an add command");
        };
        assert_eq!(draft.title, "Heat");
        assert_eq!(draft.duration_minutes, 170);
        assert_eq!(draft.year_released, 1995);
    }

    #[test]
    fn removal_resolves_position_in_filtered_view_to_id() {
        let mut s = session();
        s.set_query("arrival");
        let expected = s.active_results()[0].id();

        let mut c = console("5\n1\n");
        assert_eq!(c.next_command(&s).unwrap(), Some(Command::Remove(expected)));
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("Movie #1"));
        assert!(!out.contains("-------- Dune --------"));
    }

    #[test]
    fn removal_can_be_cancelled() {
        let mut c = console("5\n0\n");
        assert_eq!(c.next_command(&session()).unwrap(), None);
    }

    #[test]
    fn removal_with_nothing_shown_does_not_prompt() {
        let mut s = session();
        s.set_query("zzz");
        let mut c = console("5\n");
        assert_eq!(c.next_command(&s).unwrap(), None);
        assert!(String::from_utf8(c.into_output()).unwrap().contains("No movies found!"));
    }
}
