//! Excel report output
//!
//! Renders a [`SummaryBundle`](crate::types::SummaryBundle) as the
//! four-sheet ground truth workbook.

mod exporter;

pub use exporter::{
    round2, summary_rows, ReportExporter, SummaryValue, DETAIL_COLUMNS, HIGHLIGHTS_SHEET,
    HIGHLIGHT_COLUMNS, LOSSES_SHEET, SUMMARY_SHEET, WINS_SHEET,
};
