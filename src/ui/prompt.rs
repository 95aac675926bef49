//! Validated console input.
//!
//! [`Prompter`] asks until it gets an acceptable answer: non-empty text for required
//! fields, whole numbers inside an inclusive range for numeric ones. Invalid input is
//! reported and re-prompted, so bad values never reach the session. End of input is
//! returned as an `UnexpectedEof` I/O error so the caller can stop cleanly.

use crate::domain::error::Result;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

/// Line-oriented prompt over any reader/writer pair.
///
/// # Example
///
/// ```
/// use movie_catalog::ui::Prompter;
/// use std::io::Cursor;
///
/// let mut prompter = Prompter::new(Cursor::new("abc\n99\n7\n"), Vec::new());
/// let value = prompter.integer_in("Pick: ", 1..=10)?;
/// assert_eq!(value, 7);
/// # Ok::<(), movie_catalog::CatalogError>(())
/// ```
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output sink shared with the renderer.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one line without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns an `UnexpectedEof` I/O error when the input is exhausted, or any
    /// underlying read/write error.
    pub fn line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(
                std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "input closed").into(),
            );
        }
        let trimmed_len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed_len);
        Ok(buf)
    }

    /// Asks until the answer has non-whitespace content; returns it trimmed.
    ///
    /// # Errors
    ///
    /// See [`Prompter::line`].
    pub fn required_text(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.line(prompt)?;
            let trimmed = answer.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
            writeln!(self.output, "A value is required.")?;
        }
    }

    /// Asks until the answer is a whole number inside `range`.
    ///
    /// # Errors
    ///
    /// See [`Prompter::line`].
    pub fn integer_in(&mut self, prompt: &str, range: RangeInclusive<u32>) -> Result<u32> {
        loop {
            let answer = self.line(prompt)?;
            match answer.trim().parse::<i64>() {
                Ok(value) => {
                    if let Some(value) = u32::try_from(value).ok().filter(|v| range.contains(v)) {
                        return Ok(value);
                    }
                    writeln!(
                        self.output,
                        "Value must be between {} and {}.",
                        range.start(),
                        range.end()
                    )?;
                }
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }

    /// Waits for the user to press Enter.
    ///
    /// # Errors
    ///
    /// See [`Prompter::line`].
    pub fn pause(&mut self) -> Result<()> {
        self.line("Press Enter to continue...")?;
        writeln!(self.output)?;
        Ok(())
    }
}
