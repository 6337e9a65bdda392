use std::{
    fs::File,
    io::{ErrorKind, Read},
    path::Path,
};

use csv::StringRecord;

use crate::error::FinanceError;

/// A data row of a CSV file together with its 1-based line number.
#[derive(Debug)]
pub struct Row {
    pub line: u64,
    pub record: StringRecord,
}

/// Opens `path`, reads it completely and closes it again before returning.
pub fn read_file(path: &Path) -> Result<String, FinanceError> {
    let mut file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => FinanceError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => FinanceError::Io(err),
    })?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(maybe_remove_byte_order_mark(content))
}

/// Splits `content` into rows after discarding the header row. Every row must have exactly
/// `num_columns` cells.
pub fn data_rows(
    content: &str,
    num_columns: usize,
    origin: &Path,
) -> Result<Vec<Row>, FinanceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());
    reader
        .records()
        .map(|record| {
            let record = record?;
            let line = record.position().map_or(0, |position| position.line());
            if record.len() != num_columns {
                return Err(FinanceError::SchemaMismatch {
                    path: origin.to_path_buf(),
                    line,
                    expected: num_columns,
                    found: record.len(),
                });
            }
            Ok(Row { line, record })
        })
        .collect()
}

fn maybe_remove_byte_order_mark(mut content: String) -> String {
    if content.starts_with('\u{FEFF}') {
        content.remove(0);
    }
    content
}
