pub mod column;
pub mod entry;

pub use column::{Column, EntryUpdate};
pub use entry::{Entry, NewEntry};
