//! Source-agnostic cell values and their coercions

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

/// Text date layouts accepted in the Date column, tried in order
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%Y/%m/%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d-%b-%Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Years a spreadsheet date cell can hold
const EXCEL_YEARS: std::ops::RangeInclusive<i32> = 1900..=9999;

/// A single cell as read from either input format
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl RawCell {
    /// Wrap a text field, treating "" as empty
    pub fn text(s: &str) -> Self {
        if s.is_empty() {
            RawCell::Empty
        } else {
            RawCell::Text(s.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RawCell::Empty)
    }

    /// Text form of the cell (what Result/Opponent/Location are read as)
    pub fn to_text(&self) -> String {
        match self {
            RawCell::Empty => String::new(),
            RawCell::Text(s) => s.clone(),
            RawCell::Int(i) => i.to_string(),
            RawCell::Float(f) => f.to_string(),
            RawCell::Bool(true) => "True".to_string(),
            RawCell::Bool(false) => "False".to_string(),
            RawCell::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    /// Lenient date coercion: anything unrecognised or outside the
    /// spreadsheet date range becomes `None`
    pub fn to_date(&self) -> Option<NaiveDate> {
        let date = match self {
            RawCell::Date(d) => Some(*d),
            RawCell::Int(i) => excel_serial_to_date(*i as f64),
            RawCell::Float(f) => excel_serial_to_date(*f),
            RawCell::Text(s) => parse_date_text(s),
            RawCell::Empty | RawCell::Bool(_) => None,
        };
        date.filter(in_excel_range)
    }

    /// Integral goal count, or `None` if the cell is not a whole number
    /// within `i32` range
    pub fn to_goals(&self) -> Option<i64> {
        let goals = match self {
            RawCell::Int(i) => Some(*i),
            RawCell::Float(f) => whole_number(*f),
            RawCell::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
            }
            RawCell::Empty | RawCell::Bool(_) | RawCell::Date(_) => None,
        }?;
        i32::try_from(goals).ok().map(i64::from)
    }
}

fn in_excel_range(date: &NaiveDate) -> bool {
    EXCEL_YEARS.contains(&date.year())
}

fn whole_number(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Excel serial number (days since 1899-12-30) to a calendar date.
/// Serials below 1 carry no date part and are rejected, as is anything
/// before 1900-01-01 or after 9999-12-31.
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 || serial > 2_958_465.0 {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    base.checked_add_days(Days::new(serial.floor() as u64))
        .filter(in_excel_range)
}

/// Try every supported text layout.
///
/// A layout only matches if it yields a year in 1900..=9999, so "03/01/25"
/// skips `%m/%d/%Y` (year 25) and lands on `%m/%d/%y` (2025).
pub fn parse_date_text(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok().filter(in_excel_range))
        .or_else(|| {
            DATETIME_FORMATS.iter().find_map(|fmt| {
                NaiveDateTime::parse_from_str(s, fmt)
                    .ok()
                    .map(|dt| dt.date())
                    .filter(in_excel_range)
            })
        })
}
