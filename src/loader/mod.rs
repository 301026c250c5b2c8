//! Game log loading and validation
//!
//! Reads a game log from a spreadsheet (`.xlsx`, `.xlsm`, `.xls`) or a
//! comma-separated file (`.csv`), checks that the six required columns are
//! present and turns every row into a [`GameRecord`].

mod cells;
mod delimited;
mod workbook;

pub use cells::{excel_serial_to_date, parse_date_text, RawCell};

use crate::error::{ScorecardError, ScorecardResult};
use crate::types::{GameRecord, REQUIRED_COLUMNS};
use std::path::Path;
use tracing::{debug, info};

/// Input container, decided by file extension alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Workbook,
    Delimited,
}

impl SourceFormat {
    /// Detect the format from the extension (case-insensitive)
    pub fn from_path(path: &Path) -> ScorecardResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" | "xlsm" | "xls" => Ok(SourceFormat::Workbook),
            "csv" => Ok(SourceFormat::Delimited),
            _ => Err(ScorecardError::UnsupportedFormat(if ext.is_empty() {
                "(none)".to_string()
            } else {
                format!(".{}", ext)
            })),
        }
    }
}

/// The six required cells of one row, already located by header
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub date: RawCell,
    pub opponent: RawCell,
    pub location: RawCell,
    pub result: RawCell,
    pub goals_for: RawCell,
    pub goals_against: RawCell,
}

impl RawRow {
    pub fn is_blank(&self) -> bool {
        [
            &self.date,
            &self.opponent,
            &self.location,
            &self.result,
            &self.goals_for,
            &self.goals_against,
        ]
        .iter()
        .all(|c| c.is_empty())
    }

    /// Coerce into a record. `line` is the 1-based line in the source file.
    pub fn into_record(self, line: usize) -> ScorecardResult<GameRecord> {
        let goals_for = goals(&self.goals_for, "Goals_For", line)?;
        let goals_against = goals(&self.goals_against, "Goals_Against", line)?;

        Ok(GameRecord::new(
            self.date.to_date(),
            self.opponent.to_text(),
            self.location.to_text(),
            self.result.to_text(),
            goals_for,
            goals_against,
        ))
    }
}

fn goals(cell: &RawCell, column: &str, line: usize) -> ScorecardResult<i64> {
    cell.to_goals().ok_or_else(|| ScorecardError::InvalidValue {
        row: line,
        column: column.to_string(),
        value: cell.to_text(),
    })
}

/// Index of each required column in `headers`, or every missing name
pub fn locate_columns<S: AsRef<str>>(headers: &[S]) -> ScorecardResult<[usize; 6]> {
    let mut indices = [0usize; 6];
    let mut missing = Vec::new();

    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        match headers.iter().position(|h| h.as_ref() == name) {
            Some(idx) => *slot = idx,
            None => missing.push(name.to_string()),
        }
    }

    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(ScorecardError::MissingColumns(missing))
    }
}

/// Load and validate a game log
pub fn load_games(path: &Path) -> ScorecardResult<Vec<GameRecord>> {
    if !path.exists() {
        return Err(ScorecardError::NotFound(path.to_path_buf()));
    }

    let format = SourceFormat::from_path(path)?;
    debug!(path = %path.display(), ?format, "loading game log");

    let games = match format {
        SourceFormat::Workbook => workbook::read_workbook(path)?,
        SourceFormat::Delimited => delimited::read_delimited(path)?,
    };

    info!(games = games.len(), "game log loaded");
    Ok(games)
}
