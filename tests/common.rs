#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use worklog::db::Store;
use worklog::models::NewEntry;
use worklog::ui::Console;

pub fn wl() -> Command {
    cargo_bin_cmd!("worklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog.sqlite", name));
    fs::remove_file(&path).ok();
    path
}

/// Empty directory used as HOME so no real config file is picked up.
pub fn fake_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create fake home");
    path
}

pub fn date(m: u32, d: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn timmy() -> NewEntry {
    NewEntry::new(
        "Timmy",
        "test task",
        30,
        date(6, 4, 2020),
        "Allow me to test your patience..",
    )
}

pub fn alice() -> NewEntry {
    NewEntry::new(
        "Alice",
        "write report",
        45,
        date(6, 10, 2020),
        "Quarterly numbers",
    )
}

pub fn memory_store() -> Store {
    let store = Store::open_in_memory().expect("open in-memory store");
    store.initialize().expect("initialize store");
    store
}

/// Open (and initialize) a file-backed store, inserting `entries`.
pub fn seeded_store(name: &str, entries: &[NewEntry]) -> PathBuf {
    let path = setup_test_db(name);
    let store = worklog::open_store(&path).expect("open store");
    for e in entries {
        store.create(e).expect("create entry");
    }
    store.close();
    path
}

/// Drive a full interactive session from `script`, returning what was printed.
pub fn run_script(path: &PathBuf, script: &str) -> String {
    run_bytes(path, script.as_bytes())
}

/// Same as `run_script`, for input that need not be valid UTF-8.
pub fn run_bytes(path: &PathBuf, input: &[u8]) -> String {
    let store = worklog::open_store(path).expect("open store");
    let console = Console::new(Cursor::new(input.to_vec()), Vec::new(), false, "=");
    let out = worklog::run_session(store, console).expect("session");
    String::from_utf8(out).expect("utf8 output")
}

/// Reopen the database to inspect what a session left behind.
pub fn reopen(path: &PathBuf) -> Store {
    worklog::open_store(path).expect("reopen store")
}
