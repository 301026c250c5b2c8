//! Excel report exporter - summary bundle → four-sheet .xlsx

use crate::error::{ScorecardError, ScorecardResult};
use crate::types::{GameRecord, SummaryBundle};
use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet, XlsxError};
use std::path::Path;
use tracing::{debug, info};

pub const SUMMARY_SHEET: &str = "Summary";
pub const WINS_SHEET: &str = "Wins_Detail";
pub const LOSSES_SHEET: &str = "Losses_Detail";
pub const HIGHLIGHTS_SHEET: &str = "Highlights";

/// Columns of the wins sheet; the losses sheet appends "Margin"
pub const DETAIL_COLUMNS: [&str; 7] = [
    "Date",
    "Opponent",
    "Location",
    "Result",
    "Goals_For",
    "Goals_Against",
    "Goal_Diff",
];

pub const HIGHLIGHT_COLUMNS: [&str; 10] = [
    "Date",
    "Opponent",
    "Location",
    "Result",
    "Goals_For",
    "Goals_Against",
    "Win",
    "Loss",
    "Goal_Diff",
    "Type",
];

/// Value cell of a Summary row
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryValue {
    Count(usize),
    Record(String),
    Average(f64),
}

/// Round half away from zero to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Metric/value rows of the Summary sheet, in display order
pub fn summary_rows(bundle: &SummaryBundle) -> Vec<(&'static str, SummaryValue)> {
    vec![
        ("Games Played", SummaryValue::Count(bundle.games_played)),
        ("Overall Record", SummaryValue::Record(bundle.overall.to_string())),
        ("Home Record", SummaryValue::Record(bundle.home.to_string())),
        ("Away Record", SummaryValue::Record(bundle.away.to_string())),
        (
            "Avg Goals For",
            SummaryValue::Average(round2(bundle.averages.goals_for)),
        ),
        (
            "Avg Goals Against",
            SummaryValue::Average(round2(bundle.averages.goals_against)),
        ),
        (
            "Avg Goal Diff",
            SummaryValue::Average(round2(bundle.averages.goal_diff)),
        ),
    ]
}

fn export_err(what: &'static str) -> impl Fn(XlsxError) -> ScorecardError {
    move |e| ScorecardError::Export(format!("Failed to {}: {}", what, e))
}

/// Writes the ground truth report workbook
pub struct ReportExporter {
    bundle: SummaryBundle,
    date_format: Format,
}

impl ReportExporter {
    pub fn new(bundle: SummaryBundle) -> Self {
        Self {
            bundle,
            date_format: Format::new().set_num_format("yyyy-mm-dd"),
        }
    }

    /// Write all four sheets to `output_path`, replacing any existing file
    pub fn export(&self, output_path: &Path) -> ScorecardResult<()> {
        let mut workbook = Workbook::new();

        self.export_summary(&mut workbook)?;
        self.export_wins(&mut workbook)?;
        self.export_losses(&mut workbook)?;
        self.export_highlights(&mut workbook)?;

        workbook
            .save(output_path)
            .map_err(export_err("save Excel file"))?;

        info!(path = %output_path.display(), "report written");
        Ok(())
    }

    fn export_summary(&self, workbook: &mut Workbook) -> ScorecardResult<()> {
        let worksheet = add_sheet(workbook, SUMMARY_SHEET)?;
        write_header(worksheet, &["Metric", "Value"])?;

        for (idx, (metric, value)) in summary_rows(&self.bundle).into_iter().enumerate() {
            let row = (idx + 1) as u32;
            worksheet
                .write_string(row, 0, metric)
                .map_err(export_err("write metric"))?;
            match value {
                SummaryValue::Count(n) => worksheet.write_number(row, 1, n as f64),
                SummaryValue::Record(text) => worksheet.write_string(row, 1, text),
                SummaryValue::Average(avg) => worksheet.write_number(row, 1, avg),
            }
            .map_err(export_err("write metric value"))?;
        }

        Ok(())
    }

    fn export_wins(&self, workbook: &mut Workbook) -> ScorecardResult<()> {
        let worksheet = add_sheet(workbook, WINS_SHEET)?;
        write_header(worksheet, &DETAIL_COLUMNS)?;

        for (idx, game) in self.bundle.wins_by_margin.iter().enumerate() {
            let row = (idx + 1) as u32;
            let col = self.write_game(worksheet, row, game)?;
            write_int(worksheet, row, col, game.goal_diff())?;
        }

        debug!(rows = self.bundle.wins_by_margin.len(), "wins sheet written");
        Ok(())
    }

    fn export_losses(&self, workbook: &mut Workbook) -> ScorecardResult<()> {
        let worksheet = add_sheet(workbook, LOSSES_SHEET)?;
        let mut header = DETAIL_COLUMNS.to_vec();
        header.push("Margin");
        write_header(worksheet, &header)?;

        for (idx, loss) in self.bundle.losses_by_margin.iter().enumerate() {
            let row = (idx + 1) as u32;
            let col = self.write_game(worksheet, row, &loss.game)?;
            write_int(worksheet, row, col, loss.game.goal_diff())?;
            write_int(worksheet, row, col + 1, loss.margin)?;
        }

        debug!(rows = self.bundle.losses_by_margin.len(), "losses sheet written");
        Ok(())
    }

    fn export_highlights(&self, workbook: &mut Workbook) -> ScorecardResult<()> {
        let worksheet = add_sheet(workbook, HIGHLIGHTS_SHEET)?;
        write_header(worksheet, &HIGHLIGHT_COLUMNS)?;

        let highlights = [
            (&self.bundle.biggest_win, "Biggest Win"),
            (&self.bundle.toughest_loss, "Toughest Loss"),
        ];

        for (idx, (game, label)) in highlights.into_iter().enumerate() {
            let row = (idx + 1) as u32;
            let col = self.write_game(worksheet, row, game)?;
            worksheet
                .write_boolean(row, col, game.is_win())
                .map_err(export_err("write Win flag"))?;
            worksheet
                .write_boolean(row, col + 1, game.is_loss())
                .map_err(export_err("write Loss flag"))?;
            write_int(worksheet, row, col + 2, game.goal_diff())?;
            worksheet
                .write_string(row, col + 3, label)
                .map_err(export_err("write highlight type"))?;
        }

        Ok(())
    }

    /// Write the six source columns of a game; returns the next free column
    fn write_game(
        &self,
        worksheet: &mut Worksheet,
        row: u32,
        game: &GameRecord,
    ) -> ScorecardResult<u16> {
        if let Some(date) = game.date() {
            match excel_date(date) {
                Some(datetime) => worksheet
                    .write_datetime_with_format(row, 0, &datetime, &self.date_format)
                    .map_err(export_err("write date"))?,
                // Outside 1900-9999: written as ISO text
                None => worksheet
                    .write_string(row, 0, date.format("%Y-%m-%d").to_string())
                    .map_err(export_err("write date"))?,
            };
        }

        for (col, text) in [(1, game.opponent()), (2, game.location()), (3, game.result())] {
            worksheet
                .write_string(row, col, text)
                .map_err(export_err("write text"))?;
        }

        write_int(worksheet, row, 4, game.goals_for())?;
        write_int(worksheet, row, 5, game.goals_against())?;

        Ok(6)
    }
}

/// Spreadsheet date for `date`, or `None` if Excel cannot represent it
fn excel_date(date: NaiveDate) -> Option<ExcelDateTime> {
    let year = u16::try_from(date.year()).ok()?;
    ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8).ok()
}

fn add_sheet<'a>(workbook: &'a mut Workbook, name: &str) -> ScorecardResult<&'a mut Worksheet> {
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(name)
        .map_err(export_err("set worksheet name"))?;
    Ok(worksheet)
}

fn write_header(worksheet: &mut Worksheet, columns: &[&str]) -> ScorecardResult<()> {
    for (col, name) in columns.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *name)
            .map_err(export_err("write header"))?;
    }
    Ok(())
}

fn write_int(worksheet: &mut Worksheet, row: u32, col: u16, value: i64) -> ScorecardResult<()> {
    worksheet
        .write_number(row, col, value as f64)
        .map_err(export_err("write number"))?;
    Ok(())
}
