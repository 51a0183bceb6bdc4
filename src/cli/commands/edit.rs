use crate::cli::menu::{Browse, State};
use crate::cli::session::{INVALID_CHOICE, Session};
use crate::errors::{AppError, AppResult};
use crate::models::EntryUpdate;
use crate::models::entry::validate_task_name;
use crate::ui::messages::header;
use crate::utils::formatting::render_entry;
use crate::utils::{parse_date, parse_duration};
use std::io::{BufRead, Write};

const FIELDS: [(&str, &str); 5] = [
    ("a", "Task name"),
    ("b", "Task time"),
    ("c", "Date"),
    ("d", "Notes"),
    ("q", "Cancel"),
];

/// Change one field of the entry under the cursor.
pub fn handle<R: BufRead, W: Write>(s: &mut Session<R, W>, mut b: Browse) -> AppResult<State> {
    let Some(entry) = b.current().cloned() else {
        return Ok(State::MainMenu);
    };

    let rendered = render_entry(&entry, b.index + 1, b.results.len(), s.console.separator());
    s.console.clear()?;
    s.console.write(rendered)?;
    s.console.write_line(header("Edit entry"))?;
    for (key, label) in FIELDS {
        s.console.write_line(format!("{}) {}", key, label))?;
    }

    let choice = s
        .console
        .choice("\nWhat part of the entry would you like to edit?\n> ")?;
    let update = match choice.as_str() {
        "a" => EntryUpdate::TaskName(s.console.ask_until("New task name:\n> ", |v| {
            let v = v.trim();
            validate_task_name(v)?;
            Ok(v.to_string())
        })?),
        "b" => EntryUpdate::TaskTime(
            s.console
                .ask_until("New task time (rounded minutes):\n> ", parse_duration)?,
        ),
        "c" => EntryUpdate::TaskDate(
            s.console
                .ask_until("New date (MM/DD/YYYY):\n> ", parse_date)?,
        ),
        "d" => EntryUpdate::Notes(s.console.read_line("New notes:\n> ")?.trim().to_string()),
        "q" => return Ok(State::Browsing(b)),
        _ => {
            s.flash_error(INVALID_CHOICE);
            return Ok(State::Editing(b));
        }
    };

    match s.store.update(entry.id, &update) {
        Ok(updated) => {
            s.audit(
                "edit",
                &format!("entry #{}", updated.id),
                &format!("Changed {}", update.column().label()),
            );
            b.results[b.index] = updated;
            s.flash_success("Your entry has been updated!");
            Ok(State::Browsing(b))
        }
        Err(e @ AppError::NotFound(_)) => {
            s.flash_info(format!("{}; it was removed before the edit.", e));
            Ok(match b.remove_current() {
                Some(rest) => State::Browsing(rest),
                None => State::MainMenu,
            })
        }
        Err(e) => Err(e),
    }
}
