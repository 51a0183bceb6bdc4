use crate::cli::menu::State;
use crate::cli::session::Session;
use crate::errors::AppResult;
use crate::models::NewEntry;
use crate::models::entry::{validate_employee_name, validate_task_name};
use crate::ui::messages::header;
use crate::utils::formatting::mins2readable;
use crate::utils::{parse_date, parse_duration};
use std::io::{BufRead, Write};

/// Collect a new entry, ask for confirmation, then save it.
pub fn handle<R: BufRead, W: Write>(s: &mut Session<R, W>) -> AppResult<State> {
    s.console.clear()?;
    s.console.write_line(header("Add an entry"))?;

    let employee_name = s.console.ask_until("Enter your name:\n> ", |v| {
        let v = v.trim();
        validate_employee_name(v)?;
        Ok(v.to_string())
    })?;
    let task_name = s.console.ask_until("The name of your task:\n> ", |v| {
        let v = v.trim();
        validate_task_name(v)?;
        Ok(v.to_string())
    })?;
    let task_time = s.console.ask_until(
        "Time spent on the task (rounded minutes):\n> ",
        parse_duration,
    )?;
    let task_date = s
        .console
        .ask_until("Date of the task (MM/DD/YYYY):\n> ", parse_date)?;
    let notes = s
        .console
        .read_line("Additional notes (optional):\n> ")?
        .trim()
        .to_string();

    let entry = NewEntry::new(employee_name, task_name, task_time, task_date, notes);

    s.console.write_line("")?;
    s.console.write_line(format!(
        "{} | {} | {} min ({}) | {}",
        entry.employee_name,
        entry.task_name,
        entry.task_time,
        mins2readable(entry.task_time, true),
        crate::utils::date::format_date(&entry.task_date),
    ))?;

    if s.console.confirm("Save entry?")? {
        let saved = s.store.create(&entry)?;
        s.audit(
            "add",
            &format!("entry #{}", saved.id),
            &format!(
                "{} logged '{}' ({} min) on {}",
                saved.employee_name,
                saved.task_name,
                saved.task_time,
                saved.date_str()
            ),
        );
        s.flash_success("Saved!");
    } else {
        s.flash_info("Your entry was not saved.");
    }

    Ok(State::MainMenu)
}
