use crate::cli::session::Session;
use crate::errors::AppResult;
use std::io::{BufRead, Write};

pub const FAREWELL: &str = "Thank you for using Work Log DB. Goodbye.";

pub fn handle<R: BufRead, W: Write>(s: &mut Session<R, W>) -> AppResult<()> {
    s.console.write_line("")?;
    s.console.write_line(FAREWELL)
}
