//! Interactive side of the search module: the search sub-menu and one
//! handler per predicate. Each handler ends in `Browsing` over a non-empty
//! result set, or steps back to the search menu.

use crate::cli::menu::{Browse, State};
use crate::cli::session::{INVALID_CHOICE, Session};
use crate::core::search::{self, TermTarget};
use crate::db::Filter;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::date::format_date;
use crate::utils::formatting::numbered;
use crate::utils::{parse_date, parse_duration};
use std::io::{BufRead, Write};

const SEARCH_MENU: [(&str, &str); 5] = [
    ("a", "Employee name"),
    ("b", "Entry date"),
    ("c", "Task duration"),
    ("d", "Search term"),
    ("q", "Return to main menu"),
];

const DATE_MENU: [(&str, &str); 3] = [
    ("a", "Pick from existing dates"),
    ("b", "Date range"),
    ("q", "Back to search menu"),
];

const TERM_MENU: [(&str, &str); 3] = [
    ("a", "Task name"),
    ("b", "Notes"),
    ("q", "Back to search menu"),
];

fn print_menu<R: BufRead, W: Write>(
    s: &mut Session<R, W>,
    items: &[(&str, &str)],
) -> AppResult<()> {
    for (key, label) in items {
        s.console.write_line(format!("{}) {}", key, label))?;
    }
    Ok(())
}

/// Run the filter; browse the results or report an empty set.
fn browse_or_back<R: BufRead, W: Write>(
    s: &mut Session<R, W>,
    filter: &Filter,
) -> AppResult<State> {
    let results = search::run(&s.store, filter)?;
    if results.is_empty() {
        s.flash_info(format!("No entries found for {}.", filter.describe()));
        return Ok(State::Searching);
    }
    Ok(State::Browsing(Browse::new(results)))
}

pub fn handle<R: BufRead, W: Write>(s: &mut Session<R, W>) -> AppResult<State> {
    if s.store.count()? == 0 {
        s.flash_info("There are no entries to search yet.");
        return Ok(State::MainMenu);
    }

    s.console.clear()?;
    s.console.write_line(header("Search entries"))?;
    print_menu(s, &SEARCH_MENU)?;

    let choice = s
        .console
        .choice("\nWhat would you like to search by?\n> ")?;
    let next = match choice.as_str() {
        "a" => State::SearchEmployee,
        "b" => State::SearchDate,
        "c" => State::SearchDuration,
        "d" => State::SearchTerm,
        "q" => State::MainMenu,
        _ => {
            s.flash_error(INVALID_CHOICE);
            State::Searching
        }
    };
    Ok(next)
}

/// List every entry's employee, then browse the chosen one's entries.
pub fn by_employee<R: BufRead, W: Write>(s: &mut Session<R, W>) -> AppResult<State> {
    let names = search::employee_choices(&s.store)?;

    s.console.clear()?;
    s.console.write_line(header("Search by employee"))?;
    for (i, name) in names.iter().enumerate() {
        s.console.write_line(numbered(i + 1, names.len(), name))?;
    }

    loop {
        let input = s.console.read_line(
            "\nEnter the name of the employee you wish to view entries from\n(or 'q' to go back):\n> ",
        )?;
        let name = input.trim();

        if names.iter().any(|n| n == name) {
            return browse_or_back(s, &search::by_employee(name));
        }
        if name.eq_ignore_ascii_case("q") {
            return Ok(State::Searching);
        }
        s.console.error("No entries for that employee. Please type a name from the list.")?;
    }
}

pub fn by_date<R: BufRead, W: Write>(s: &mut Session<R, W>) -> AppResult<State> {
    s.console.clear()?;
    s.console.write_line(header("Search by date"))?;
    print_menu(s, &DATE_MENU)?;

    let choice = s.console.choice("\n> ")?;
    match choice.as_str() {
        "a" => pick_date(s),
        "b" => date_range(s),
        "q" => Ok(State::Searching),
        _ => {
            s.flash_error(INVALID_CHOICE);
            Ok(State::SearchDate)
        }
    }
}

/// Pick one of the dates on record by its number.
fn pick_date<R: BufRead, W: Write>(s: &mut Session<R, W>) -> AppResult<State> {
    let dates = search::date_choices(&s.store)?;

    s.console.write_line("")?;
    for (i, d) in dates.iter().enumerate() {
        s.console.write_line(numbered(i + 1, dates.len(), &format_date(d)))?;
    }

    let total = dates.len();
    let picked = s.console.ask_until(
        "\nEnter the number of the date you would like to search\n(or 'q' to go back):\n> ",
        |v| {
            let v = v.trim();
            if v.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match v.parse::<usize>() {
                Ok(n) if (1..=total).contains(&n) => Ok(Some(n - 1)),
                _ => Err(AppError::Validation(format!(
                    "please enter a number between 1 and {}",
                    total
                ))),
            }
        },
    )?;

    match picked {
        Some(i) => browse_or_back(s, &search::by_date(dates[i])),
        None => Ok(State::Searching),
    }
}

/// Inclusive range between two typed dates.
fn date_range<R: BufRead, W: Write>(s: &mut Session<R, W>) -> AppResult<State> {
    let start = s
        .console
        .ask_until("\nStart date (MM/DD/YYYY):\n> ", parse_date)?;
    let end = s
        .console
        .ask_until("End date (MM/DD/YYYY):\n> ", parse_date)?;

    browse_or_back(s, &search::by_date_range(start, end))
}

/// Exact task time; durations with no entry are re-prompted.
pub fn by_duration<R: BufRead, W: Write>(s: &mut Session<R, W>) -> AppResult<State> {
    let durations = search::duration_choices(&s.store)?;

    s.console.clear()?;
    s.console.write_line(header("Search by duration"))?;
    let listed: Vec<String> = durations.iter().map(|m| m.to_string()).collect();
    s.console
        .write_line(format!("Durations on record (minutes): {}", listed.join(", ")))?;

    loop {
        let input = s.console.read_line(
            "\nWhat duration of time would you like to search? (or 'q' to go back)\n> ",
        )?;
        if input.trim().eq_ignore_ascii_case("q") {
            return Ok(State::Searching);
        }

        let minutes = match parse_duration(&input) {
            Ok(m) => m,
            Err(e) => {
                s.console.error(e)?;
                continue;
            }
        };

        match search::by_duration(&s.store, minutes)? {
            Some(filter) => return browse_or_back(s, &filter),
            None => s.console.error(
                "There are no entries with that duration of time. Please try another time.",
            )?,
        }
    }
}

/// Substring search in task names or notes.
pub fn by_term<R: BufRead, W: Write>(s: &mut Session<R, W>) -> AppResult<State> {
    s.console.clear()?;
    s.console.write_line(header("Search by term"))?;

    let term = s
        .console
        .ask_until("What term would you like to search for?\n> ", |v| {
            if v.trim().is_empty() {
                Err(AppError::Validation("the search term is empty".into()))
            } else {
                Ok(v.trim().to_string())
            }
        })?;

    s.console.write_line("\nWhere would you like to search?")?;
    print_menu(s, &TERM_MENU)?;

    let target = loop {
        match s.console.choice("> ")?.as_str() {
            "a" => break TermTarget::TaskName,
            "b" => break TermTarget::Notes,
            "q" => return Ok(State::Searching),
            _ => s.console.error("Please enter a, b or q.")?,
        }
    };

    browse_or_back(s, &search::by_term(target, &term))
}
