use crate::date::DateValue;

use super::gap_fill::DenseMatrix;

impl DenseMatrix {
    /// Drops every position dated before `start`. The axis must be sorted.
    ///
    /// If `start` is after the last date, the result has no dates and all series are empty.
    pub fn starting_from(self, start: DateValue) -> DenseMatrix {
        let first = self
            .dates
            .iter()
            .position(|date| *date >= start)
            .unwrap_or(self.dates.len());
        DenseMatrix {
            dates: self.dates[first..].to_vec(),
            series: self
                .series
                .into_iter()
                .map(|mut series| {
                    series.values.drain(..first);
                    series
                })
                .collect(),
        }
    }
}
