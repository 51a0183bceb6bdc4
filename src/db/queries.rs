use crate::db::filter::Filter;
use crate::errors::{AppError, AppResult};
use crate::models::{Column, Entry, EntryUpdate, NewEntry};
use crate::utils::date::{DB_DATE_FORMAT, parse_db_date};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};

const ENTRY_COLUMNS: &str =
    "id, employee_name, task_name, task_time, task_date, notes, created_at";

pub fn map_row(row: &Row) -> Result<Entry> {
    let date_str: String = row.get("task_date")?;

    let task_date = parse_db_date(&date_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(Entry {
        id: row.get("id")?,
        employee_name: row.get("employee_name")?,
        task_name: row.get("task_name")?,
        task_time: row.get("task_time")?,
        task_date,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_entry(conn: &Connection, entry: &NewEntry) -> AppResult<Entry> {
    entry.validate()?;

    conn.execute(
        "INSERT INTO entries (employee_name, task_name, task_time, task_date, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.employee_name,
            entry.task_name,
            entry.task_time,
            entry.task_date.format(DB_DATE_FORMAT).to_string(),
            entry.notes,
            NewEntry::created_now(),
        ],
    )?;

    load_entry(conn, conn.last_insert_rowid())
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Entry> {
    let sql = format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1");
    conn.query_row(&sql, [id], map_row)
        .optional()?
        .ok_or(AppError::NotFound(id))
}

/// Ordered, optionally filtered listing. Ties on the sort column fall back
/// to the creation instant, then to the id, both newest first.
pub fn select_entries(
    conn: &Connection,
    order_by: Column,
    filter: Option<&Filter>,
) -> AppResult<Vec<Entry>> {
    let (where_clause, values) = match filter {
        Some(f) => {
            let (clause, values) = f.to_sql();
            (format!("WHERE {clause}"), values)
        }
        None => (String::new(), Vec::new()),
    };

    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM entries {where_clause}
         ORDER BY {} DESC, created_at DESC, id DESC",
        order_by.to_db_str()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_entry(conn: &Connection, id: i64, update: &EntryUpdate) -> AppResult<Entry> {
    update.validate()?;

    let sql = format!(
        "UPDATE entries SET {} = ?1 WHERE id = ?2",
        update.column().to_db_str()
    );
    let changed = conn.execute(&sql, params![update.to_sql_value(), id])?;

    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    load_entry(conn, id)
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let removed = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    if removed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

pub fn count_entries(conn: &Connection) -> AppResult<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
    Ok(count as usize)
}

/// Employee name of every entry, most recent first. Names repeat once per entry.
pub fn load_employee_names(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT employee_name FROM entries
         ORDER BY task_date DESC, created_at DESC, id DESC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Distinct task dates, newest first.
pub fn load_entry_dates(conn: &Connection) -> AppResult<Vec<NaiveDate>> {
    let mut stmt = conn.prepare("SELECT DISTINCT task_date FROM entries ORDER BY task_date DESC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        let raw = r?;
        let d = parse_db_date(&raw).ok_or(AppError::InvalidDate(raw))?;
        out.push(d);
    }
    Ok(out)
}

/// Distinct task times present in the table, ascending.
pub fn load_durations(conn: &Connection) -> AppResult<Vec<i64>> {
    let mut stmt = conn.prepare("SELECT DISTINCT task_time FROM entries ORDER BY task_time ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, i64>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Whether any entry matches the filter.
pub fn any_match(conn: &Connection, filter: &Filter) -> AppResult<bool> {
    let (clause, values): (String, Vec<Value>) = filter.to_sql();
    let sql = format!("SELECT 1 FROM entries WHERE {clause} LIMIT 1");
    let mut stmt = conn.prepare(&sql)?;
    Ok(stmt.exists(params_from_iter(values))?)
}
