use crate::color::Rgb;
use crate::date::DateValue;
use crate::ir::Channel;

use super::sparse::SparseSeries;

/// A [SparseSeries] with every gap filled.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseSeries {
    pub series: String,
    pub color: Rgb,
    pub channel: Channel,
    pub values: Vec<f64>,
}

impl From<DenseSeries> for SparseSeries {
    fn from(dense: DenseSeries) -> Self {
        SparseSeries {
            series: dense.series,
            color: dense.color,
            channel: dense.channel,
            values: dense.values.into_iter().map(Some).collect(),
        }
    }
}

/// Gap-free series aligned to a shared, sorted date axis.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    pub dates: Vec<DateValue>,
    pub series: Vec<DenseSeries>,
}

impl DenseMatrix {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Fills the gaps of `sparse`, whose values are positioned on `dates`. Both must have the
/// same length, which [DateAxis](super::DateAxis)-built series always have.
///
/// - Gaps before the first observation become 0, since nothing has been contributed yet.
/// - Gaps after the last observation carry the last observed value forward.
/// - Gaps between two observations are linearly interpolated by elapsed calendar days.
pub fn fill_gaps(dates: &[DateValue], sparse: &SparseSeries) -> DenseSeries {
    debug_assert_eq!(
        dates.len(),
        sparse.values.len(),
        "Sparse series '{}' is not aligned to the date axis",
        sparse.series,
    );
    let values = &sparse.values;
    let mut filled: Vec<f64> = Vec::with_capacity(values.len());

    let leading_gap = values.iter().take_while(|value| value.is_none()).count();
    filled.resize(leading_gap, 0.0);

    let mut index = leading_gap;
    while index < values.len() {
        if let Some(value) = values[index] {
            filled.push(value);
            index += 1;
            continue;
        }

        // values[index - 1] is known, because the leading gap is already handled
        let previous_index = index - 1;
        let previous_value = filled[previous_index];
        let next_known = (index..values.len())
            .find_map(|next_index| values[next_index].map(|value| (next_index, value)));
        match next_known {
            None => {
                filled.resize(values.len(), previous_value);
                index = values.len();
            }
            Some((next_index, next_value)) => {
                let previous_date = dates[previous_index];
                let span = dates[next_index].days_since(previous_date) as f64;
                for date in &dates[index..next_index] {
                    let elapsed = date.days_since(previous_date) as f64;
                    filled.push(previous_value + (next_value - previous_value) * elapsed / span);
                }
                index = next_index;
            }
        }
    }

    DenseSeries {
        series: sparse.series.clone(),
        color: sparse.color,
        channel: sparse.channel,
        values: filled,
    }
}

pub fn fill_matrix(dates: &[DateValue], sparse: &[SparseSeries]) -> DenseMatrix {
    DenseMatrix {
        dates: dates.to_vec(),
        series: sparse.iter().map(|series| fill_gaps(dates, series)).collect(),
    }
}
