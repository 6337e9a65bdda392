use crate::color::Rgb;
use crate::ir::{Channel, Series};

use super::axis::DateAxis;

/// Cumulative values of one channel of a series, positioned on a [DateAxis].
/// `None` marks axis dates the series has no observation for.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseSeries {
    pub series: String,
    pub color: Rgb,
    pub channel: Channel,
    pub values: Vec<Option<f64>>,
}

/// Projects the running sums of `investment` and `earnings` of `series` onto `axis`.
///
/// The running sums rely on the records being sorted by date, which [Series] guarantees.
/// If several records share a date, the position holds the running sum after the last one.
/// Records whose date is not on the axis still count towards later sums.
pub fn build_sparse_channels(axis: &DateAxis, series: &Series) -> [SparseSeries; 2] {
    let mut principal = vec![None; axis.len()];
    let mut earnings = vec![None; axis.len()];
    let mut principal_sum = 0.0;
    let mut earnings_sum = 0.0;
    for record in series.records() {
        principal_sum += record.investment;
        earnings_sum += record.earnings;
        if let Some(position) = axis.position(record.date) {
            principal[position] = Some(principal_sum);
            earnings[position] = Some(earnings_sum);
        }
    }
    [
        SparseSeries {
            series: series.name.clone(),
            color: series.color,
            channel: Channel::Principal,
            values: principal,
        },
        SparseSeries {
            series: series.name.clone(),
            color: series.color,
            channel: Channel::Earnings,
            values: earnings,
        },
    ]
}

/// Sparse channels of all `series`, principal before earnings, in series order.
pub fn build_sparse_matrix(axis: &DateAxis, series: &[Series]) -> Vec<SparseSeries> {
    series
        .iter()
        .flat_map(|series| build_sparse_channels(axis, series))
        .collect()
}
