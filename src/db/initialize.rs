use rusqlite::{Connection, OptionalExtension, Result};

/// Create the `entries` table and its indexes if missing.
fn ensure_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_name  TEXT NOT NULL CHECK(length(employee_name) BETWEEN 1 AND 100),
            task_name      TEXT NOT NULL CHECK(length(task_name) > 0),
            task_time      INTEGER NOT NULL CHECK(task_time >= 0),
            task_date      TEXT NOT NULL,
            notes          TEXT NOT NULL DEFAULT '',
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(task_date);
        CREATE INDEX IF NOT EXISTS idx_entries_employee ON entries(employee_name);
        "#,
    )?;
    Ok(())
}

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Initialize the database schema. Safe to call on every start.
pub fn init_db(conn: &Connection) -> Result<()> {
    ensure_entries_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}

/// Check if a table with the given name exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}
