use crate::date::{days_in_year, DateValue};
use crate::ir::Record;

/// Derived series of a single record sequence, one value per record.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub dates: Vec<DateValue>,
    /// Running sum of `investment`.
    pub principal: Vec<f64>,
    /// Running sum of `investment + earnings`.
    pub balance: Vec<f64>,
    /// What the investments would be worth growing at a fixed annual rate.
    pub expected: Vec<f64>,
}

/// `records` must be sorted by date.
pub fn project(records: &[Record], annual_return_rate: f64) -> Projection {
    Projection {
        dates: records.iter().map(|record| record.date).collect(),
        principal: principal_series(records),
        balance: balance_series(records),
        expected: expected_series(records, annual_return_rate),
    }
}

pub fn principal_series(records: &[Record]) -> Vec<f64> {
    running_total(records, |total, record| total + record.investment)
}

pub fn balance_series(records: &[Record]) -> Vec<f64> {
    running_total(records, |total, record| {
        total + record.earnings + record.investment
    })
}

/// Compounds the running total daily between consecutive records, then adds the record's
/// investment. The first record only contributes its investment.
///
/// The daily rate is derived from the length of the current record's year, even if the gap
/// to the previous record crosses a year boundary.
pub fn expected_series(records: &[Record], annual_return_rate: f64) -> Vec<f64> {
    let mut previous_date: Option<DateValue> = None;
    running_total(records, |total, record| {
        let grown = match previous_date {
            Some(previous_date) => {
                let daily_rate = daily_rate(annual_return_rate, record.date.year());
                let days = record.date.days_since(previous_date) as f64;
                total * (1.0 + daily_rate).powf(days)
            }
            None => total,
        };
        previous_date = Some(record.date);
        let total = grown + record.investment;
        log::debug!("Expected value on {}: {:.2}", record.date, total);
        total
    })
}

fn daily_rate(annual_return_rate: f64, year: i32) -> f64 {
    (1.0 + annual_return_rate).powf(1.0 / f64::from(days_in_year(year))) - 1.0
}

fn running_total(records: &[Record], mut step: impl FnMut(f64, &Record) -> f64) -> Vec<f64> {
    records
        .iter()
        .scan(0.0, |total, record| {
            *total = step(*total, record);
            Some(*total)
        })
        .collect()
}
