//! Work Log library root.
//! Exposes the CLI parser, the interactive session, the storage layer and
//! the high-level run() function used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use cli::session::Session;
use config::Config;
use db::Store;
use errors::AppResult;
use std::io::{self, BufRead, Write};
use std::path::Path;
use ui::Console;

/// Open the store at `path` and make sure the schema is in place.
pub fn open_store(path: &Path) -> AppResult<Store> {
    let store = Store::open(path)?;
    store.initialize()?;
    Ok(store)
}

/// Run the interactive menu over any input/output pair until the user
/// quits or input ends. Returns the writer so callers can inspect it.
pub fn run_session<R: BufRead, W: Write>(store: Store, console: Console<R, W>) -> AppResult<W> {
    let mut session = Session::new(store, console);
    cli::menu::run(&mut session)?;
    Ok(session.finish())
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if cli.no_clear {
        cfg.clear_screen = false;
    }

    // 4️⃣ open the store; failing here is fatal
    let db_path = cfg.database_path();
    let store = open_store(&db_path)?;
    if let Err(e) = store.log("init", "session", &format!("Opened {}", db_path.display())) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    // 5️⃣ hand over to the menu loop
    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(
        stdin.lock(),
        stdout.lock(),
        cfg.clear_screen,
        cfg.separator_char.clone(),
    );
    run_session(store, console)?;
    Ok(())
}
