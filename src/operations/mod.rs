mod axis;
mod date_filter;
mod gap_fill;
mod projection;
mod sparse;

pub use axis::DateAxis;
pub use gap_fill::{fill_gaps, fill_matrix, DenseMatrix, DenseSeries};
pub use projection::{balance_series, expected_series, principal_series, project, Projection};
pub use sparse::{build_sparse_channels, build_sparse_matrix, SparseSeries};

use crate::ir::Series;

/// Aligns all `series` onto the union of their dates and fills every gap.
pub fn align(series: &[Series]) -> DenseMatrix {
    let axis = DateAxis::from_series(series);
    let sparse = build_sparse_matrix(&axis, series);
    fill_matrix(axis.dates(), &sparse)
}
