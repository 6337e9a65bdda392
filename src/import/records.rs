use std::path::Path;

use crate::date::DateValue;
use crate::error::FinanceError;
use crate::ir::Record;

use super::csv_file::{data_rows, read_file, Row};

const NUM_COLUMNS: usize = 4;

/// Loads the `date,balance,investment,earnings` rows of a series file, sorted by date.
/// The sort is stable, so records sharing a date keep their file order.
pub fn load_records(path: &Path) -> Result<Vec<Record>, FinanceError> {
    let content = read_file(path)?;
    let mut records = parse_records(&content, path)?;
    records.sort_by_key(|record| record.date);
    Ok(records)
}

fn parse_records(content: &str, origin: &Path) -> Result<Vec<Record>, FinanceError> {
    data_rows(content, NUM_COLUMNS, origin)?
        .iter()
        .map(|row| parse_record(row, origin))
        .collect()
}

fn parse_record(row: &Row, origin: &Path) -> Result<Record, FinanceError> {
    let cell = |index: usize| row.record.get(index).unwrap_or_default();
    let number = |index: usize, column: &'static str| {
        cell(index)
            .parse::<f64>()
            .map_err(|_| FinanceError::InvalidNumber {
                path: origin.to_path_buf(),
                line: row.line,
                column,
                input: cell(index).to_string(),
            })
    };
    Ok(Record {
        date: DateValue::parse(cell(0))?,
        balance: number(1, "balance")?,
        investment: number(2, "investment")?,
        earnings: number(3, "earnings")?,
    })
}
