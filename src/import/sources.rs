use std::path::Path;

use crate::error::FinanceError;
use crate::ir::SeriesSource;

use super::csv_file::{data_rows, read_file};

const NUM_COLUMNS: usize = 3;

pub fn load_sources(path: &Path) -> Result<Vec<SeriesSource>, FinanceError> {
    let content = read_file(path)?;
    parse_sources(&content, path)
}

fn parse_sources(content: &str, origin: &Path) -> Result<Vec<SeriesSource>, FinanceError> {
    data_rows(content, NUM_COLUMNS, origin)?
        .into_iter()
        .map(|row| {
            row.record
                .deserialize::<SeriesSource>(None)
                .map_err(FinanceError::from)
        })
        .collect()
}
