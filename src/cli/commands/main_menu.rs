use crate::cli::menu::State;
use crate::cli::session::{INVALID_CHOICE, Session};
use crate::errors::AppResult;
use crate::ui::messages::header;
use std::io::{BufRead, Write};

/// Top-level keys, in display order.
const MENU: [(&str, &str); 3] = [
    ("a", "Add an entry"),
    ("s", "Search for an entry"),
    ("q", "Quit the application"),
];

pub fn handle<R: BufRead, W: Write>(s: &mut Session<R, W>) -> AppResult<State> {
    s.console.clear()?;
    s.console.write_line(header("Welcome to Work Log DB"))?;
    for (key, label) in MENU {
        s.console.write_line(format!("{}) {}", key, label))?;
    }

    let choice = s.console.choice("\nWhat would you like to do?\n> ")?;
    let next = match choice.as_str() {
        "a" => State::Adding,
        "s" => State::Searching,
        "q" => State::Quit,
        _ => {
            s.flash_error(INVALID_CHOICE);
            State::MainMenu
        }
    };
    Ok(next)
}
