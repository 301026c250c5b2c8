use crate::core::compute_summary;
use crate::error::ScorecardResult;
use crate::excel::ReportExporter;
use crate::loader::load_games;
use crate::types::SummaryBundle;
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Load the game log, aggregate it and write the report.
///
/// Nothing is written unless loading and aggregation both succeed.
pub fn generate_report(input: &Path, report: &Path) -> ScorecardResult<SummaryBundle> {
    info!(input = %input.display(), report = %report.display(), "generating report");

    let games = load_games(input)?;
    let bundle = compute_summary(&games)?;

    ReportExporter::new(bundle.clone()).export(report)?;
    Ok(bundle)
}

/// Execute the report command and print the two confirmation lines
pub fn run(input: &Path, report: &Path) -> ScorecardResult<()> {
    let bundle = generate_report(input, report)?;

    println!(
        "{}",
        format!(
            "✅ Excel report generated successfully: {}",
            report.display()
        )
        .bold()
        .green()
    );
    println!("{}", confirmation_line(&bundle));

    Ok(())
}

fn confirmation_line(bundle: &SummaryBundle) -> String {
    format!(
        "Games: {} | Wins: {} | Losses: {}",
        bundle.games_played, bundle.overall.wins, bundle.overall.losses
    )
}
