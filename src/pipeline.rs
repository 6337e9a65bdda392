use anyhow::{ensure, Result};

use crate::color::{Rgb, EARNINGS_COLOR_SCALE};
use crate::date::DateValue;
use crate::ir::{Channel, Record, Series};
use crate::operations::{self, DenseMatrix};
use crate::render::{Chart, ChartSeries, ChartStyle};

pub const RETURNS_TITLE: &str = "Financial Returns Over Time";
pub const STACKED_TITLE: &str = "Account Values Over Time";

/// Aligns all `series` and optionally drops the dates before `start`.
pub fn stacked_matrix(series: &[Series], start: Option<DateValue>) -> DenseMatrix {
    log::info!("Extrapolating data...");
    let matrix = operations::align(series);
    log::info!(
        "Extrapolating data...done ({} dates, {} series)",
        matrix.dates.len(),
        matrix.series.len()
    );
    match start {
        Some(start) => matrix.starting_from(start),
        None => matrix,
    }
}

/// Stacked chart of the principal and earnings of every series.
pub fn stacked_chart(series: &[Series], start: Option<DateValue>) -> Result<Chart> {
    let matrix = stacked_matrix(series, start);
    if let Some(start) = start {
        ensure!(!matrix.is_empty(), "There is no data on or after {}", start);
    }
    let chart_series = matrix
        .series
        .into_iter()
        .map(|dense| {
            let color = match dense.channel {
                Channel::Principal => dense.color,
                Channel::Earnings => dense.color.scale(EARNINGS_COLOR_SCALE),
            };
            ChartSeries {
                label: format!("{} {}", dense.series, dense.channel.label()),
                color,
                values: dense.values,
            }
        })
        .collect();
    Chart::new(STACKED_TITLE, ChartStyle::Stacked, matrix.dates, chart_series)
}

/// Line chart of principal, balance and the value expected at `annual_return_rate`.
pub fn returns_chart(records: &[Record], annual_return_rate: f64) -> Result<Chart> {
    let projection = operations::project(records, annual_return_rate);
    Chart::new(
        RETURNS_TITLE,
        ChartStyle::Lines,
        projection.dates,
        vec![
            ChartSeries {
                label: "Principal".to_string(),
                color: Rgb::RED,
                values: projection.principal,
            },
            ChartSeries {
                label: "Balance".to_string(),
                color: Rgb::BLUE,
                values: projection.balance,
            },
            ChartSeries {
                label: "Expected".to_string(),
                color: Rgb::GREEN,
                values: projection.expected,
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, investment: f64, earnings: f64) -> Record {
        Record {
            date: DateValue::parse(date).unwrap(),
            balance: 0.0,
            investment,
            earnings,
        }
    }

    fn date(input: &str) -> DateValue {
        DateValue::parse(input).unwrap()
    }

    fn disjoint_series() -> Vec<Series> {
        vec![
            Series::new(
                "Early".to_string(),
                Rgb::new(100, 0, 0),
                vec![
                    record("01/01/2020", 100.0, 0.0),
                    record("01/11/2020", 100.0, 10.0),
                ],
            ),
            Series::new(
                "Late".to_string(),
                Rgb::new(0, 0, 100),
                vec![
                    record("02/01/2020", 50.0, 0.0),
                    record("02/03/2020", 0.0, 2.0),
                    record("02/05/2020", 50.0, 2.0),
                ],
            ),
        ]
    }

    #[test]
    fn disjoint_ranges_align_on_union_axis() {
        let series = disjoint_series();
        let matrix = stacked_matrix(&series, None);
        assert_eq!(5, matrix.dates.len());
        assert_eq!(4, matrix.series.len());

        let early_principal = &matrix.series[0].values;
        let early_earnings = &matrix.series[1].values;
        let late_principal = &matrix.series[2].values;
        let late_earnings = &matrix.series[3].values;

        // Zero before their own start, carried forward after their own end
        assert_eq!(&vec![100.0, 200.0, 200.0, 200.0, 200.0], early_principal);
        assert_eq!(&vec![0.0, 10.0, 10.0, 10.0, 10.0], early_earnings);
        assert_eq!(&vec![0.0, 0.0, 50.0, 50.0, 100.0], late_principal);
        assert_eq!(&vec![0.0, 0.0, 0.0, 2.0, 4.0], late_earnings);
    }

    #[test]
    fn interleaved_series_are_interpolated() {
        let series = vec![
            Series::new(
                "A".to_string(),
                Rgb::RED,
                vec![
                    record("01/01/2020", 100.0, 0.0),
                    record("01/11/2020", 100.0, 0.0),
                ],
            ),
            Series::new(
                "B".to_string(),
                Rgb::BLUE,
                vec![record("01/06/2020", 1.0, 0.0)],
            ),
        ];
        let matrix = stacked_matrix(&series, None);
        assert_eq!(vec![100.0, 150.0, 200.0], matrix.series[0].values);
        assert_eq!(vec![0.0, 1.0, 1.0], matrix.series[2].values);
    }

    #[test]
    fn start_date_truncates_matrix() {
        let series = disjoint_series();
        let matrix = stacked_matrix(&series, Some(date("02/02/2020")));
        assert_eq!(vec![date("02/03/2020"), date("02/05/2020")], matrix.dates);
        assert_eq!(vec![200.0, 200.0], matrix.series[0].values);
        assert_eq!(vec![50.0, 100.0], matrix.series[2].values);
    }

    #[test]
    fn stacked_chart_labels_and_colors() {
        let chart = stacked_chart(&disjoint_series(), None).unwrap();
        assert_eq!(STACKED_TITLE, chart.title());
        assert_eq!(ChartStyle::Stacked, chart.style());
        let labels: Vec<&str> = chart.series().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            vec![
                "Early Principal",
                "Early Earnings",
                "Late Principal",
                "Late Earnings"
            ],
            labels
        );
        assert_eq!(Rgb::new(100, 0, 0), chart.series()[0].color);
        assert_eq!(Rgb::new(150, 0, 0), chart.series()[1].color);
        assert_eq!(Rgb::new(0, 0, 100), chart.series()[2].color);
        assert_eq!(Rgb::new(0, 0, 150), chart.series()[3].color);
    }

    #[test]
    fn stacked_chart_colors_series_sharing_a_name() {
        let series = vec![
            Series::new(
                "Same".to_string(),
                Rgb::new(100, 0, 0),
                vec![record("01/01/2020", 1.0, 1.0)],
            ),
            Series::new(
                "Same".to_string(),
                Rgb::new(0, 100, 0),
                vec![record("01/02/2020", 1.0, 1.0)],
            ),
        ];
        let chart = stacked_chart(&series, None).unwrap();
        let colors: Vec<Rgb> = chart.series().iter().map(|s| s.color).collect();
        assert_eq!(
            vec![
                Rgb::new(100, 0, 0),
                Rgb::new(150, 0, 0),
                Rgb::new(0, 100, 0),
                Rgb::new(0, 150, 0)
            ],
            colors
        );
    }

    #[test]
    fn stacked_chart_start_after_all_data() {
        let result = stacked_chart(&disjoint_series(), Some(date("01/01/2021")));
        assert!(result.is_err());
    }

    #[test]
    fn stacked_chart_without_series() {
        assert!(stacked_chart(&[], None).is_err());
    }

    #[test]
    fn returns_chart_series() {
        let records = vec![
            record("01/01/2020", 100.0, 0.0),
            record("02/01/2020", 100.0, 5.0),
        ];
        let chart = returns_chart(&records, 0.0).unwrap();
        assert_eq!(RETURNS_TITLE, chart.title());
        assert_eq!(ChartStyle::Lines, chart.style());
        assert_eq!(2, chart.dates().len());
        let labels: Vec<&str> = chart.series().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(vec!["Principal", "Balance", "Expected"], labels);
        assert_eq!(vec![100.0, 200.0], chart.series()[0].values);
        assert_eq!(vec![100.0, 205.0], chart.series()[1].values);
        assert_eq!(vec![100.0, 200.0], chart.series()[2].values);
    }

    #[test]
    fn returns_chart_without_records() {
        assert!(returns_chart(&[], 0.08).is_err());
    }
}
