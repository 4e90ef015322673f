//! CLI library components for the people-import checker.

pub mod directory;
pub mod logging;
pub mod report;
