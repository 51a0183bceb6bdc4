//! Line-oriented terminal I/O for the interactive session.
//!
//! `Console` is generic over its reader and writer so the whole menu can be
//! driven from a script in tests. Every prompt blocks until a line arrives;
//! end of input surfaces as [`AppError::InputClosed`].

use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::colors::CLEAR_SCREEN;
use std::fmt;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
    separator: String,
    /// Messages shown right after the next screen clear.
    pending: Vec<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool, separator: impl Into<String>) -> Self {
        Self {
            input,
            output,
            clear_screen,
            separator: separator.into(),
            pending: Vec::new(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Give back the writer (tests inspect what was printed).
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn write_line<T: fmt::Display>(&mut self, line: T) -> AppResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn write<T: fmt::Display>(&mut self, text: T) -> AppResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn error<T: fmt::Display>(&mut self, msg: T) -> AppResult<()> {
        self.write_line(messages::error(msg))
    }

    /// Queue an already formatted line for the next screen.
    pub fn flash(&mut self, line: String) {
        self.pending.push(line);
    }

    /// Start a new screen: clear (when enabled), then show queued messages.
    pub fn clear(&mut self) -> AppResult<()> {
        if self.clear_screen {
            self.write(CLEAR_SCREEN)?;
        }
        for line in std::mem::take(&mut self.pending) {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    /// Print `prompt`, then read one line with the trailing newline removed.
    pub fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // raw bytes: an undecodable line is just an unknown answer
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Read a menu key: trimmed and lowercased.
    pub fn choice(&mut self, prompt: &str) -> AppResult<String> {
        Ok(self.read_line(prompt)?.trim().to_lowercase())
    }

    /// Ask a yes/no question. Only `y`/`yes` confirm.
    pub fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        let answer = self.choice(&format!("{} [y/N]: ", prompt))?;
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }

    /// Keep asking until `parse` accepts the input.
    pub fn ask_until<T, F>(&mut self, prompt: &str, mut parse: F) -> AppResult<T>
    where
        F: FnMut(&str) -> AppResult<T>,
    {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(AppError::InputClosed) => return Err(AppError::InputClosed),
                Err(e) => self.error(format!("Sorry, that is not valid. {}", e))?,
            }
        }
    }
}
