use crate::cli::menu::{Browse, State};
use crate::cli::session::{INVALID_CHOICE, Session};
use crate::errors::{AppError, AppResult};
use crate::utils::formatting::render_entry;
use std::io::{BufRead, Write};

const LEGEND: [(&str, &str); 5] = [
    ("n", "next entry"),
    ("p", "previous entry"),
    ("e", "edit entry"),
    ("d", "delete entry"),
    ("q", "return to main menu"),
];

/// Show the current result and act on the chosen key.
pub fn handle<R: BufRead, W: Write>(s: &mut Session<R, W>, mut b: Browse) -> AppResult<State> {
    s.console.clear()?;

    let Some(entry) = b.current() else {
        s.flash_info("No more results.");
        return Ok(State::MainMenu);
    };
    let rendered = render_entry(entry, b.index + 1, b.results.len(), s.console.separator());
    s.console.write(rendered)?;
    for (key, label) in LEGEND {
        s.console.write_line(format!("{}) {}", key, label))?;
    }

    let choice = s.console.choice("\n> ")?;
    let next = match choice.as_str() {
        "n" => {
            if b.index + 1 < b.results.len() {
                b.index += 1;
                State::Browsing(b)
            } else {
                s.flash_info("That was the last result.");
                State::MainMenu
            }
        }
        "p" => {
            if b.index > 0 {
                b.index -= 1;
            } else {
                s.flash_info("This is the first result.");
            }
            State::Browsing(b)
        }
        "e" => State::Editing(b),
        "d" => delete_current(s, b)?,
        "q" => State::MainMenu,
        _ => {
            s.flash_error(INVALID_CHOICE);
            State::Browsing(b)
        }
    };
    Ok(next)
}

/// Confirm, then delete the entry under the cursor.
fn delete_current<R: BufRead, W: Write>(s: &mut Session<R, W>, b: Browse) -> AppResult<State> {
    let Some(entry) = b.current().cloned() else {
        return Ok(State::MainMenu);
    };

    if !s.console.confirm("Are you sure you want to delete this entry?")? {
        s.flash_info("Entry kept.");
        return Ok(State::Browsing(b));
    }

    match s.store.delete(entry.id) {
        Ok(()) => {
            s.audit(
                "del",
                &format!("entry #{}", entry.id),
                &format!("Deleted '{}' by {}", entry.task_name, entry.employee_name),
            );
            s.flash_success("Entry deleted!");
        }
        Err(e @ AppError::NotFound(_)) => {
            s.flash_info(format!("{}; it was already removed.", e));
        }
        Err(e) => return Err(e),
    }

    Ok(match b.remove_current() {
        Some(rest) => State::Browsing(rest),
        None => State::MainMenu,
    })
}
