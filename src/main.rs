use anyhow::Context;
use clap::Parser;
use scorecard::cli;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scorecard")]
#[command(version)]
#[command(about = "Ground-truth season statistics from a game log")]
#[command(long_about = "Scorecard - ground-truth season statistics

Reads a game log (.xlsx, .xls or .csv) with the columns
  Date, Opponent, Location, Result, Goals_For, Goals_Against
and writes a four-sheet Excel report:
  Summary        - games played, overall/home/away records, scoring averages
  Wins_Detail    - every win, largest margin first
  Losses_Detail  - every loss, most lopsided first
  Highlights     - biggest win and toughest loss

EXAMPLES:
  scorecard --file season_2025.xlsx
  scorecard --file games.csv --report_xlsx truth.xlsx

Set RUST_LOG=scorecard=debug for diagnostic output on stderr.")]
struct Cli {
    /// Path to the game log (.xlsx, .xls or .csv)
    #[arg(long, default_value = "games.xlsx", env = "SCORECARD_FILE")]
    file: PathBuf,

    /// Excel report output path (overwritten if present)
    #[arg(
        long = "report_xlsx",
        visible_alias = "report-xlsx",
        default_value = "ground_truth_report.xlsx",
        env = "SCORECARD_REPORT"
    )]
    report_xlsx: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "scorecard=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    cli::run(&args.file, &args.report_xlsx).with_context(|| {
        format!(
            "Failed to build report {} from {}",
            args.report_xlsx.display(),
            args.file.display()
        )
    })
}
