//! Shared fixtures for integration tests

#![allow(dead_code)]

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "Date,Opponent,Location,Result,Goals_For,Goals_Against";

/// Write a CSV game log: header plus one line per entry
pub fn write_csv(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = String::from(HEADER);
    content.push('\n');
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}

/// The three-game season used across the suite
pub fn three_game_csv(dir: &Path) -> PathBuf {
    write_csv(
        dir,
        "season.csv",
        &[
            "2025-02-08,Army,Home,W,10,5",
            "2025-02-15,Navy,Away,L,3,9",
            "2025-02-22,Duke,Away,W,7,2",
        ],
    )
}

/// One spreadsheet row: date as (y, m, d) or None, then the five other fields
pub type SheetGame<'a> = (Option<(u16, u8, u8)>, &'a str, &'a str, &'a str, f64, f64);

/// Write a single-sheet workbook with the given header and games
pub fn write_xlsx(path: &Path, header: &[&str], games: &[SheetGame<'_>]) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let worksheet = workbook.add_worksheet();

    for (col, name) in header.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name).unwrap();
    }

    for (idx, (date, opponent, location, result, gf, ga)) in games.iter().enumerate() {
        let row = (idx + 1) as u32;
        if let Some((y, m, d)) = date {
            let dt = ExcelDateTime::from_ymd(*y, *m, *d).unwrap();
            worksheet
                .write_datetime_with_format(row, 0, &dt, &date_format)
                .unwrap();
        }
        worksheet.write_string(row, 1, *opponent).unwrap();
        worksheet.write_string(row, 2, *location).unwrap();
        worksheet.write_string(row, 3, *result).unwrap();
        worksheet.write_number(row, 4, *gf).unwrap();
        worksheet.write_number(row, 5, *ga).unwrap();
    }

    workbook.save(path).unwrap();
}
