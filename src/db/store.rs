//! Storage context: owns the single SQLite connection of a session.

use crate::db::filter::Filter;
use crate::db::{initialize, log, queries};
use crate::errors::AppResult;
use crate::models::{Column, Entry, EntryUpdate, NewEntry};
use crate::utils::path::ensure_parent_dir;
use chrono::NaiveDate;
use rusqlite::Connection;
use std::path::Path;

pub struct Store {
    pub conn: Connection,
}

impl Store {
    /// Open (or create) the database file at `path`.
    pub fn open(path: &Path) -> AppResult<Self> {
        ensure_parent_dir(path)?;
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Private, throw-away database.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Create missing tables. Idempotent.
    pub fn initialize(&self) -> AppResult<()> {
        initialize::init_db(&self.conn)?;
        Ok(())
    }

    pub fn table_exists(&self, name: &str) -> AppResult<bool> {
        Ok(initialize::table_exists(&self.conn, name)?)
    }

    pub fn create(&self, entry: &NewEntry) -> AppResult<Entry> {
        queries::insert_entry(&self.conn, entry)
    }

    pub fn get(&self, id: i64) -> AppResult<Entry> {
        queries::load_entry(&self.conn, id)
    }

    pub fn select(&self, order_by: Column, filter: Option<&Filter>) -> AppResult<Vec<Entry>> {
        queries::select_entries(&self.conn, order_by, filter)
    }

    /// All entries in the default order (task date, newest first).
    pub fn all(&self) -> AppResult<Vec<Entry>> {
        self.select(Column::TaskDate, None)
    }

    pub fn update(&self, id: i64, update: &EntryUpdate) -> AppResult<Entry> {
        queries::update_entry(&self.conn, id, update)
    }

    pub fn delete(&self, id: i64) -> AppResult<()> {
        queries::delete_entry(&self.conn, id)
    }

    pub fn count(&self) -> AppResult<usize> {
        queries::count_entries(&self.conn)
    }

    pub fn employee_names(&self) -> AppResult<Vec<String>> {
        queries::load_employee_names(&self.conn)
    }

    pub fn entry_dates(&self) -> AppResult<Vec<NaiveDate>> {
        queries::load_entry_dates(&self.conn)
    }

    pub fn durations(&self) -> AppResult<Vec<i64>> {
        queries::load_durations(&self.conn)
    }

    pub fn any_match(&self, filter: &Filter) -> AppResult<bool> {
        queries::any_match(&self.conn, filter)
    }

    /// Append a line to the operation log.
    pub fn log(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::record(&self.conn, operation, target, message)
    }

    /// Close the connection; a failing close is ignored.
    pub fn close(self) {
        let _ = self.conn.close();
    }
}
