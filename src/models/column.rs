use crate::errors::AppResult;
use crate::models::entry::{validate_employee_name, validate_task_name, validate_task_time};
use crate::utils::date::DB_DATE_FORMAT;
use chrono::NaiveDate;
use rusqlite::types::Value;

/// Columns of the `entries` table that can be sorted or filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    EmployeeName,
    TaskName,
    TaskTime,
    TaskDate,
    Notes,
    CreatedAt,
}

impl Column {
    /// Convert enum → DB column name
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Column::EmployeeName => "employee_name",
            Column::TaskName => "task_name",
            Column::TaskTime => "task_time",
            Column::TaskDate => "task_date",
            Column::Notes => "notes",
            Column::CreatedAt => "created_at",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Column::EmployeeName => "employee name",
            Column::TaskName => "task name",
            Column::TaskTime => "task time",
            Column::TaskDate => "date",
            Column::Notes => "notes",
            Column::CreatedAt => "creation time",
        }
    }
}

/// A single-field change applied by the edit flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryUpdate {
    EmployeeName(String),
    TaskName(String),
    TaskTime(i64),
    TaskDate(NaiveDate),
    Notes(String),
}

impl EntryUpdate {
    pub fn column(&self) -> Column {
        match self {
            EntryUpdate::EmployeeName(_) => Column::EmployeeName,
            EntryUpdate::TaskName(_) => Column::TaskName,
            EntryUpdate::TaskTime(_) => Column::TaskTime,
            EntryUpdate::TaskDate(_) => Column::TaskDate,
            EntryUpdate::Notes(_) => Column::Notes,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        match self {
            EntryUpdate::EmployeeName(s) => validate_employee_name(s),
            EntryUpdate::TaskName(s) => validate_task_name(s),
            EntryUpdate::TaskTime(m) => validate_task_time(*m),
            EntryUpdate::TaskDate(_) | EntryUpdate::Notes(_) => Ok(()),
        }
    }

    /// Value bound into the UPDATE statement.
    pub fn to_sql_value(&self) -> Value {
        match self {
            EntryUpdate::EmployeeName(s) | EntryUpdate::TaskName(s) | EntryUpdate::Notes(s) => {
                Value::Text(s.clone())
            }
            EntryUpdate::TaskTime(m) => Value::Integer(*m),
            EntryUpdate::TaskDate(d) => Value::Text(d.format(DB_DATE_FORMAT).to_string()),
        }
    }
}
