use std::collections::{BTreeSet, HashMap};

use crate::date::DateValue;
use crate::ir::Series;

/// The sorted, deduplicated union of the dates of all series in a run, together with the
/// position of each date.
#[derive(Debug, Clone, PartialEq)]
pub struct DateAxis {
    dates: Vec<DateValue>,
    positions: HashMap<DateValue, usize>,
}

impl DateAxis {
    pub fn from_series<'a>(series: impl IntoIterator<Item = &'a Series>) -> Self {
        let dates: BTreeSet<DateValue> = series.into_iter().flat_map(Series::dates).collect();
        let dates: Vec<DateValue> = dates.into_iter().collect();
        let positions = dates
            .iter()
            .enumerate()
            .map(|(position, date)| (*date, position))
            .collect();
        Self { dates, positions }
    }

    pub fn dates(&self) -> &[DateValue] {
        &self.dates
    }

    pub fn position(&self, date: DateValue) -> Option<usize> {
        self.positions.get(&date).copied()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
