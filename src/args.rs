use std::path::PathBuf;

use clap::Parser;

use crate::date::DateValue;

pub const DEFAULT_ANNUAL_RETURN_RATE: f64 = 0.08;

/// Plot principal, balance and expected value of a single series over time
#[derive(Parser, Debug)]
#[command(name = "returns-plot")]
pub struct ReturnsArgs {
    /// Path to the series CSV file (date,balance,investment,earnings)
    pub source: PathBuf,

    /// Annual return rate the expected value grows at, e.g. 0.08 for 8%
    #[arg(default_value_t = DEFAULT_ANNUAL_RETURN_RATE, allow_negative_numbers = true)]
    pub expected_annual_return_rate: f64,
}

/// Plot the principal and earnings of several series as a stacked chart
#[derive(Parser, Debug)]
#[command(name = "stacked-plot")]
pub struct StackedArgs {
    /// Path to the sources index CSV file (file,series,color)
    pub sources: PathBuf,

    /// Only plot dates on or after this date (MM/DD/YYYY)
    pub start_date: Option<DateValue>,
}

pub fn parse_returns() -> ReturnsArgs {
    ReturnsArgs::parse()
}

pub fn parse_stacked() -> StackedArgs {
    StackedArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_with_default_rate() {
        let args = ReturnsArgs::try_parse_from(["returns-plot", "source.csv"]).unwrap();
        assert_eq!(PathBuf::from("source.csv"), args.source);
        assert_eq!(DEFAULT_ANNUAL_RETURN_RATE, args.expected_annual_return_rate);
    }

    #[test]
    fn returns_with_rate() {
        let args = ReturnsArgs::try_parse_from(["returns-plot", "source.csv", "0.05"]).unwrap();
        assert_eq!(0.05, args.expected_annual_return_rate);
    }

    #[test]
    fn returns_with_negative_rate() {
        let args = ReturnsArgs::try_parse_from(["returns-plot", "source.csv", "-0.02"]).unwrap();
        assert_eq!(-0.02, args.expected_annual_return_rate);
    }

    #[test]
    fn returns_wrong_argument_count() {
        assert!(ReturnsArgs::try_parse_from(["returns-plot"]).is_err());
        assert!(ReturnsArgs::try_parse_from(["returns-plot", "a.csv", "0.05", "extra"]).is_err());
    }

    #[test]
    fn stacked_without_start_date() {
        let args = StackedArgs::try_parse_from(["stacked-plot", "sources.csv"]).unwrap();
        assert_eq!(PathBuf::from("sources.csv"), args.sources);
        assert_eq!(None, args.start_date);
    }

    #[test]
    fn stacked_with_start_date() {
        let args =
            StackedArgs::try_parse_from(["stacked-plot", "sources.csv", "01/05/2020"]).unwrap();
        assert_eq!(DateValue::from_ymd(2020, 1, 5), args.start_date);
    }

    #[test]
    fn stacked_with_malformed_start_date() {
        let result = StackedArgs::try_parse_from(["stacked-plot", "sources.csv", "2020-01-05"]);
        assert!(result.is_err());
    }

    #[test]
    fn stacked_wrong_argument_count() {
        assert!(StackedArgs::try_parse_from(["stacked-plot"]).is_err());
        assert!(
            StackedArgs::try_parse_from(["stacked-plot", "a.csv", "01/05/2020", "extra"]).is_err()
        );
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory as _;
        ReturnsArgs::command().debug_assert();
        StackedArgs::command().debug_assert();
    }
}
