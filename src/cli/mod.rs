pub mod commands;
pub mod menu;
pub mod parser;
pub mod session;
