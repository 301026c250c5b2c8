//! Spreadsheet reader - first worksheet of an .xlsx/.xlsm/.xls workbook

use super::cells::{excel_serial_to_date, parse_date_text, RawCell};
use super::{locate_columns, RawRow};
use crate::error::{ScorecardError, ScorecardResult};
use crate::types::GameRecord;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use tracing::debug;

pub(super) fn read_workbook(path: &Path) -> ScorecardResult<Vec<GameRecord>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| ScorecardError::Workbook(format!("Failed to open workbook: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ScorecardError::Workbook("Workbook has no worksheets".to_string()))?
        .map_err(|e| ScorecardError::Workbook(format!("Failed to read worksheet: {}", e)))?;

    let mut rows = range.rows();

    // Header row; an empty sheet has no columns at all
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(header_name).collect())
        .unwrap_or_default();
    debug!(?headers, "worksheet header");

    let [date, opponent, location, result, goals_for, goals_against] = locate_columns(&headers)?;

    let mut games = Vec::new();
    for (idx, row) in rows.enumerate() {
        let cell = |col: usize| row.get(col).map(to_raw_cell).unwrap_or(RawCell::Empty);
        let raw = RawRow {
            date: cell(date),
            opponent: cell(opponent),
            location: cell(location),
            result: cell(result),
            goals_for: cell(goals_for),
            goals_against: cell(goals_against),
        };
        if raw.is_blank() {
            continue;
        }
        // +1 for the header, +1 for 1-based lines
        games.push(raw.into_record(idx + 2)?);
    }

    Ok(games)
}

fn header_name(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn to_raw_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty | Data::Error(_) => RawCell::Empty,
        Data::String(s) => RawCell::text(s),
        Data::Int(i) => RawCell::Int(*i),
        Data::Float(f) => RawCell::Float(*f),
        Data::Bool(b) => RawCell::Bool(*b),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64())
            .map(RawCell::Date)
            .unwrap_or(RawCell::Empty),
        Data::DateTimeIso(s) => parse_date_text(s)
            .map(RawCell::Date)
            .unwrap_or_else(|| RawCell::text(s)),
        Data::DurationIso(s) => RawCell::text(s),
    }
}
