//! CLI command handlers

pub mod commands;

pub use commands::{generate_report, run};
