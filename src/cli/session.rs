//! One interactive session: the open store plus the console it talks to.

use crate::db::Store;
use crate::ui::Console;
use crate::ui::messages;
use std::io::{BufRead, Write};

/// Shown whenever a menu key is not recognized.
pub const INVALID_CHOICE: &str = "That is not a valid choice. Please try again.";

pub struct Session<R, W> {
    pub store: Store,
    pub console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: Store, console: Console<R, W>) -> Self {
        Self { store, console }
    }

    /// Write to the operation log. A failure is shown as a warning and
    /// never aborts the action that triggered it.
    pub fn audit(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.store.log(operation, target, message) {
            self.console
                .flash(messages::warning(format!("Failed to write internal log: {}", e)));
        }
    }

    /// Tear down, returning the console output.
    pub fn finish(self) -> W {
        self.store.close();
        self.console.into_output()
    }

    pub fn flash_info(&mut self, msg: impl std::fmt::Display) {
        self.console.flash(messages::info(msg));
    }

    pub fn flash_success(&mut self, msg: impl std::fmt::Display) {
        self.console.flash(messages::success(msg));
    }

    pub fn flash_error(&mut self, msg: impl std::fmt::Display) {
        self.console.flash(messages::error(msg));
    }
}
