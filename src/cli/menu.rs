//! Menu state machine.
//!
//! Each state maps to exactly one handler and every handler returns the
//! next state, so repeated invalid input never grows the call stack.

use crate::cli::commands::{add, browse, edit, main_menu, quit, search};
use crate::cli::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use std::io::{BufRead, Write};

/// A result set being paged through, one entry at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Browse {
    pub results: Vec<Entry>,
    pub index: usize,
}

impl Browse {
    pub fn new(results: Vec<Entry>) -> Self {
        Self { results, index: 0 }
    }

    pub fn current(&self) -> Option<&Entry> {
        self.results.get(self.index)
    }

    /// Drop the current entry, keeping the index. `None` once no entry is
    /// left at that position.
    pub fn remove_current(mut self) -> Option<Self> {
        if self.index < self.results.len() {
            self.results.remove(self.index);
        }
        if self.index < self.results.len() {
            Some(self)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    MainMenu,
    Adding,
    Searching,
    SearchEmployee,
    SearchDate,
    SearchDuration,
    SearchTerm,
    Browsing(Browse),
    Editing(Browse),
    Quit,
}

/// Run one state's handler.
fn dispatch<R: BufRead, W: Write>(s: &mut Session<R, W>, state: State) -> AppResult<State> {
    match state {
        State::MainMenu => main_menu::handle(s),
        State::Adding => add::handle(s),
        State::Searching => search::handle(s),
        State::SearchEmployee => search::by_employee(s),
        State::SearchDate => search::by_date(s),
        State::SearchDuration => search::by_duration(s),
        State::SearchTerm => search::by_term(s),
        State::Browsing(b) => browse::handle(s, b),
        State::Editing(b) => edit::handle(s, b),
        State::Quit => Ok(State::Quit),
    }
}

/// Drive the session until the user quits or input ends.
///
/// Storage failures inside an action are reported and the loop goes back to
/// the main menu; only output failures end the session with an error.
pub fn run<R: BufRead, W: Write>(s: &mut Session<R, W>) -> AppResult<()> {
    let mut state = State::MainMenu;

    loop {
        state = match dispatch(s, state) {
            Ok(State::Quit) | Err(AppError::InputClosed) => return quit::handle(s),
            Ok(next) => next,
            Err(e @ AppError::Io(_)) => return Err(e),
            Err(e) => {
                s.flash_error(e);
                State::MainMenu
            }
        };
    }
}
