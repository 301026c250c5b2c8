//! Comma-separated reader

use super::cells::RawCell;
use super::{locate_columns, RawRow};
use crate::error::ScorecardResult;
use crate::types::GameRecord;
use csv::StringRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Required columns of one CSV line. Everything is read as text and coerced
/// afterwards; unknown columns are ignored by serde.
#[derive(Debug, Deserialize)]
struct CsvGameRow {
    #[serde(rename = "Date", default)]
    date: String,
    #[serde(rename = "Opponent", default)]
    opponent: String,
    #[serde(rename = "Location", default)]
    location: String,
    #[serde(rename = "Result", default)]
    result: String,
    #[serde(rename = "Goals_For", default)]
    goals_for: String,
    #[serde(rename = "Goals_Against", default)]
    goals_against: String,
}

impl From<CsvGameRow> for RawRow {
    fn from(row: CsvGameRow) -> Self {
        RawRow {
            date: RawCell::text(&row.date),
            opponent: RawCell::text(&row.opponent),
            location: RawCell::text(&row.location),
            result: RawCell::text(&row.result),
            goals_for: RawCell::text(&row.goals_for),
            goals_against: RawCell::text(&row.goals_against),
        }
    }
}

pub(super) fn read_delimited(path: &Path) -> ScorecardResult<Vec<GameRecord>> {
    let file = File::open(path)?;
    read_games(file)
}

fn read_games<R: Read>(rdr: R) -> ScorecardResult<Vec<GameRecord>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);

    let headers = reader.headers()?.clone();
    debug!(?headers, "csv header");
    locate_columns(&headers.iter().collect::<Vec<_>>())?;

    let mut games = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        // Physical line the record starts on, counting blank lines and quoted newlines
        let line = record.position().map_or(0, |pos| pos.line() as usize);
        let row: CsvGameRow = record.deserialize(Some(&headers))?;
        let raw = RawRow::from(row);
        if raw.is_blank() {
            continue;
        }
        games.push(raw.into_record(line)?);
    }

    Ok(games)
}
