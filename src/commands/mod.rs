//! Command implementations

pub mod prepare;
pub mod simple;

pub use prepare::run_prepare;
pub use simple::{ConsoleView, PlayStats, run_simple};
