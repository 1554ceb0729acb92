//! Reading input tables and rendering results

pub mod loader;
pub mod report;

pub use loader::{join_readers, load_joined, LoadError};
pub use report::format_report;
