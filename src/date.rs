use std::{fmt, str::FromStr};

use chrono::{Datelike as _, Days, NaiveDate};

use crate::error::FinanceError;

const DATE_FORMAT: &str = "%m/%d/%Y";

/// `NaiveDate::num_days_from_ce()` of 01/01/1970
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// A calendar day without time component, written as `MM/DD/YYYY`.
///
/// Ordering is chronological and day arithmetic uses the number of days since 01/01/1970,
/// so the textual form is only ever parsed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue(NaiveDate);

impl DateValue {
    pub fn parse(input: &str) -> Result<Self, FinanceError> {
        NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| FinanceError::MalformedDate {
                input: input.to_string(),
            })
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn days_since_epoch(&self) -> i64 {
        i64::from(self.0.num_days_from_ce() - EPOCH_DAYS_FROM_CE)
    }

    /// Signed number of calendar days from `earlier` to `self`.
    pub fn days_since(&self, earlier: DateValue) -> i64 {
        self.days_since_epoch() - earlier.days_since_epoch()
    }

    pub fn checked_add_days(&self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl FromStr for DateValue {
    type Err = FinanceError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Number of days in the given calendar year (365 or 366).
pub fn days_in_year(year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, 12, 31).map_or(365, |last_day| last_day.ordinal())
}
