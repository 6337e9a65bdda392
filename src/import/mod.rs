use std::path::Path;

use crate::color::Rgb;
use crate::error::FinanceError;
use crate::ir::Series;

mod csv_file;
mod records;
mod sources;

pub use records::load_records;
pub use sources::load_sources;

/// Loads every series listed in the sources index at `path`.
///
/// Series are returned in index order. If a series name is listed more than once, the
/// later row's data replaces the earlier one but keeps the earlier position.
pub fn load_series(path: &Path) -> Result<Vec<Series>, FinanceError> {
    let sources = load_sources(path)?;
    let mut loaded: Vec<Series> = Vec::with_capacity(sources.len());
    for source in sources {
        log::debug!(
            "Loading series '{}' from {}",
            source.series,
            source.file.display()
        );
        let color = Rgb::parse(&source.color)?;
        let records = load_records(&source.file)?;
        let series = Series::new(source.series, color, records);
        match loaded
            .iter_mut()
            .find(|existing| existing.name == series.name)
        {
            Some(existing) => {
                log::warn!("Series '{}' is listed more than once", series.name);
                *existing = series;
            }
            None => loaded.push(series),
        }
    }
    Ok(loaded)
}
