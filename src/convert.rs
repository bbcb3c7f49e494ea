use crate::parser::{self, Line, ParseError};
use crate::table::CsvTable;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Single pass over the input text, classifying each line into the table.
pub fn build_table(input: &str) -> Result<CsvTable, ParseError> {
    let mut table = CsvTable::new();
    for raw in input.lines() {
        match parser::classify(raw)? {
            Line::Bits(value) => table.extend_last(value),
            Line::Result(values) => table.push_row(values),
            Line::Other => {}
        }
    }
    Ok(table)
}

pub fn convert_text(input: &str) -> Result<String, ConvertError> {
    let table = build_table(input)?;
    Ok(table.render())
}

/// Reads the input file fully, converts it, and overwrites the output file.
/// The read completes and the input handle is closed before anything is
/// written. Any failure propagates unrecovered.
pub fn convert_file(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let text = fs::read_to_string(input)?;
    let csv = convert_text(&text)?;
    fs::write(output, csv)?;
    Ok(())
}
