//! Scorecard - ground-truth season statistics from a game log
//!
//! Loads a table of game results, derives win/loss splits, scoring averages,
//! margin rankings and best/worst games, and writes them as a four-sheet
//! Excel report.
//!
//! # Example
//!
//! ```no_run
//! use scorecard::core::compute_summary;
//! use scorecard::excel::ReportExporter;
//! use scorecard::loader::load_games;
//! use std::path::Path;
//!
//! let games = load_games(Path::new("season.csv"))?;
//! let bundle = compute_summary(&games)?;
//!
//! println!("Record: {}", bundle.overall);
//!
//! ReportExporter::new(bundle).export(Path::new("ground_truth_report.xlsx"))?;
//! # Ok::<(), scorecard::error::ScorecardError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod loader;
pub mod types;

// Re-export commonly used types
pub use error::{ScorecardError, ScorecardResult};
pub use types::{GameRecord, SummaryBundle, TeamRecord};
