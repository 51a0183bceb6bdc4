use crate::errors::{AppError, AppResult};
use crate::utils::date::DATE_FORMAT;
use chrono::{NaiveDate, Utc};

/// Longest accepted employee name.
pub const MAX_EMPLOYEE_NAME: usize = 100;

/// A stored work-log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,                // ⇔ entries.id
    pub employee_name: String,  // ⇔ entries.employee_name (TEXT, <= 100 chars)
    pub task_name: String,      // ⇔ entries.task_name
    pub task_time: i64,         // ⇔ entries.task_time (INT minutes, >= 0)
    pub task_date: NaiveDate,   // ⇔ entries.task_date (TEXT "YYYY-MM-DD")
    pub notes: String,          // ⇔ entries.notes (TEXT, default '')
    pub created_at: String,     // ⇔ entries.created_at (TEXT, RFC 3339 UTC)
}

impl Entry {
    /// Task date in the user-facing `MM/DD/YYYY` form.
    pub fn date_str(&self) -> String {
        self.task_date.format(DATE_FORMAT).to_string()
    }
}

/// Field values collected by the add flow, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub employee_name: String,
    pub task_name: String,
    pub task_time: i64,
    pub task_date: NaiveDate,
    pub notes: String,
}

impl NewEntry {
    pub fn new(
        employee_name: impl Into<String>,
        task_name: impl Into<String>,
        task_time: i64,
        task_date: NaiveDate,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            employee_name: employee_name.into(),
            task_name: task_name.into(),
            task_time,
            task_date,
            notes: notes.into(),
        }
    }

    /// Check the invariants every persisted entry must satisfy.
    pub fn validate(&self) -> AppResult<()> {
        validate_employee_name(&self.employee_name)?;
        validate_task_name(&self.task_name)?;
        validate_task_time(self.task_time)
    }

    /// Creation instant stamped on insert. Always UTC so text order is
    /// creation order.
    pub fn created_now() -> String {
        Utc::now().to_rfc3339()
    }
}

pub fn validate_employee_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("employee name is required".into()));
    }
    if name.chars().count() > MAX_EMPLOYEE_NAME {
        return Err(AppError::Validation(format!(
            "employee name exceeds {} characters",
            MAX_EMPLOYEE_NAME
        )));
    }
    Ok(())
}

pub fn validate_task_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("task name is required".into()));
    }
    Ok(())
}

pub fn validate_task_time(minutes: i64) -> AppResult<()> {
    if minutes < 0 {
        return Err(AppError::Validation(format!(
            "task time must not be negative (got {})",
            minutes
        )));
    }
    Ok(())
}
