use clap::Parser;

/// Command-line interface definition for worklog
/// Interactive work log backed by SQLite
#[derive(Parser, Debug)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "An interactive work log: add, search, edit and delete task entries stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a separate journal)
    #[arg(long = "db")]
    pub db: Option<String>,

    /// Do not clear the screen between views
    #[arg(long = "no-clear")]
    pub no_clear: bool,
}
