pub mod filter;
pub mod initialize;
pub mod log;
pub mod queries;
pub mod store;

pub use filter::Filter;
pub use store::Store;
