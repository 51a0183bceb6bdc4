//! Row filters understood by `Store::select`.

use crate::models::Column;
use crate::utils::date::{DATE_FORMAT, DB_DATE_FORMAT};
use chrono::NaiveDate;
use rusqlite::types::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Case-sensitive substring match on the column's text form.
    Contains { column: Column, term: String },
    /// Exact employee name.
    Employee(String),
    /// Entries logged on one day.
    Date(NaiveDate),
    /// Inclusive date range.
    DateRange { start: NaiveDate, end: NaiveDate },
    /// Exact task time in minutes.
    Duration(i64),
}

impl Filter {
    /// WHERE clause (without the keyword) plus its bound parameters.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        match self {
            // `instr` is case-sensitive, unlike LIKE
            Filter::Contains { column, term } => (
                format!("instr(CAST({} AS TEXT), ?1) > 0", column.to_db_str()),
                vec![Value::Text(term.clone())],
            ),
            Filter::Employee(name) => (
                "employee_name = ?1".to_string(),
                vec![Value::Text(name.clone())],
            ),
            Filter::Date(d) => ("task_date = ?1".to_string(), vec![date_value(d)]),
            Filter::DateRange { start, end } => (
                "task_date BETWEEN ?1 AND ?2".to_string(),
                vec![date_value(start), date_value(end)],
            ),
            Filter::Duration(m) => ("task_time = ?1".to_string(), vec![Value::Integer(*m)]),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Filter::Contains { column, term } => format!("{} containing \"{}\"", column.label(), term),
            Filter::Employee(name) => format!("employee \"{}\"", name),
            Filter::Date(d) => format!("date {}", d.format(DATE_FORMAT)),
            Filter::DateRange { start, end } => format!(
                "dates {} to {}",
                start.format(DATE_FORMAT),
                end.format(DATE_FORMAT)
            ),
            Filter::Duration(m) => format!("task time {} min", m),
        }
    }
}

fn date_value(d: &NaiveDate) -> Value {
    Value::Text(d.format(DB_DATE_FORMAT).to_string())
}
