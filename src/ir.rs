use serde::Deserialize;
use std::path::PathBuf;

use crate::color::Rgb;
use crate::date::DateValue;

/// One observation day of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub date: DateValue,
    pub balance: f64,
    pub investment: f64,
    pub earnings: f64,
}

/// A named, colored sequence of records, ascending by date.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: Rgb,
    records: Vec<Record>,
}

impl Series {
    /// `records` must be ascending by date, as [load_records](crate::import::load_records)
    /// returns them.
    pub fn new(name: String, color: Rgb, records: Vec<Record>) -> Self {
        debug_assert!(
            records.windows(2).all(|pair| pair[0].date <= pair[1].date),
            "Records of series '{}' are not sorted by date",
            name,
        );
        Self {
            name,
            color,
            records,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn dates(&self) -> impl Iterator<Item = DateValue> + '_ {
        self.records.iter().map(|record| record.date)
    }
}

/// A row of the sources index file: `file,series,color`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeriesSource {
    pub file: PathBuf,
    pub series: String,
    pub color: String,
}

/// The cumulative quantity a sparse or dense series tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Running sum of `investment`.
    Principal,
    /// Running sum of `earnings`.
    Earnings,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Principal => "Principal",
            Channel::Earnings => "Earnings",
        }
    }
}
