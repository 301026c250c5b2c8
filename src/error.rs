use std::path::PathBuf;
use thiserror::Error;

pub type ScorecardResult<T> = Result<T, ScorecardError>;

#[derive(Error, Debug)]
pub enum ScorecardError {
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported file type '{0}'. Use .xlsx, .xls or .csv")]
    UnsupportedFormat(String),

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Invalid value '{value}' in column {column} (line {row})")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Dataset contains no games")]
    EmptyDataset,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Export error: {0}")]
    Export(String),
}
