//! Search predicates over the work log.
//!
//! Builders turn a user's choice into a [`Filter`]; [`run`] applies it and
//! returns the result set in browse order (task date, newest first).
//! Matching is exact or plain substring containment, never fuzzy.

use crate::db::{Filter, Store};
use crate::errors::AppResult;
use crate::models::{Column, Entry};
use crate::utils::date::ordered_range;
use chrono::NaiveDate;

/// Where a free-text term is looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermTarget {
    TaskName,
    Notes,
}

impl TermTarget {
    pub fn column(&self) -> Column {
        match self {
            TermTarget::TaskName => Column::TaskName,
            TermTarget::Notes => Column::Notes,
        }
    }
}

pub fn by_employee(name: &str) -> Filter {
    Filter::Employee(name.to_string())
}

pub fn by_date(date: NaiveDate) -> Filter {
    Filter::Date(date)
}

/// Inclusive range; reversed bounds are swapped.
pub fn by_date_range(start: NaiveDate, end: NaiveDate) -> Filter {
    let (start, end) = ordered_range(start, end);
    Filter::DateRange { start, end }
}

/// Exact duration, or `None` when no entry has that task time.
pub fn by_duration(store: &Store, minutes: i64) -> AppResult<Option<Filter>> {
    let filter = Filter::Duration(minutes);
    if store.any_match(&filter)? {
        Ok(Some(filter))
    } else {
        Ok(None)
    }
}

pub fn by_term(target: TermTarget, term: &str) -> Filter {
    Filter::Contains {
        column: target.column(),
        term: term.to_string(),
    }
}

/// Apply a filter, ordered by task date descending.
pub fn run(store: &Store, filter: &Filter) -> AppResult<Vec<Entry>> {
    store.select(Column::TaskDate, Some(filter))
}

/// Pick list for the employee search: one name per entry, newest first.
pub fn employee_choices(store: &Store) -> AppResult<Vec<String>> {
    store.employee_names()
}

/// Pick list for the date search: distinct dates, newest first.
pub fn date_choices(store: &Store) -> AppResult<Vec<NaiveDate>> {
    store.entry_dates()
}

pub fn duration_choices(store: &Store) -> AppResult<Vec<i64>> {
    store.durations()
}
