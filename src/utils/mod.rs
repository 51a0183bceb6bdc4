pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod time;

pub use date::parse_date;
pub use formatting::mins2readable;
pub use time::parse_duration;
