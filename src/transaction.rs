//! Transaction record and line parsing.

use crate::error::ParseError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use std::str::FromStr;

/// Timestamp layout of the first column, e.g. `2010-01-01 12:30:25 UTC`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Number of comma-separated columns in a transaction line.
pub const FIELD_COUNT: usize = 4;

/// One parsed input line: `timestamp,origin,destination,amount`.
///
/// A `Transaction` only exists fully formed; every constructor goes through
/// [`Transaction::from_fields`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// When the transaction happened (always UTC)
    pub timestamp: DateTime<Utc>,

    /// Sending party, free-form
    pub origin: String,

    /// Receiving party, free-form
    pub destination: String,

    /// Transaction amount
    pub amount: f64,
}

impl Transaction {
    /// Builds a transaction from already-split fields.
    ///
    /// Fails if there are not exactly four fields, the timestamp does not
    /// match [`TIMESTAMP_FORMAT`], or the amount is not a number.
    pub fn from_fields<'a, I>(fields: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fields: Vec<&str> = fields.into_iter().collect();
        let [timestamp, origin, destination, amount] = fields.as_slice() else {
            return Err(ParseError::FieldCount {
                found: fields.len(),
            });
        };

        Ok(Transaction {
            timestamp: parse_timestamp(timestamp)?,
            origin: origin.to_string(),
            destination: destination.to_string(),
            amount: parse_amount(amount)?,
        })
    }

    /// Calendar date of the transaction, used as the grouping key.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }
}

impl FromStr for Transaction {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_line(line)
    }
}

/// Parses one raw input line.
///
/// Fields are separated by plain commas with no quoting, so a line with an
/// embedded comma in any column is rejected by the field count check.
pub fn parse_line(line: &str) -> Result<Transaction, ParseError> {
    Transaction::from_fields(line.split(','))
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| ParseError::Timestamp {
            value: value.to_string(),
            source,
        })
}

fn parse_amount(value: &str) -> Result<f64, ParseError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|source| ParseError::Amount {
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_line_all_fields() {
        let tx = parse_line("2010-01-01 12:30:25 UTC,a,topp,1000.0").unwrap();

        assert_eq!(tx.date(), NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
        assert_eq!(tx.timestamp.hour(), 12);
        assert_eq!(tx.timestamp.minute(), 30);
        assert_eq!(tx.timestamp.second(), 25);
        assert_eq!(tx.origin, "a");
        assert_eq!(tx.destination, "topp");
        assert_eq!(tx.amount, 1000.0);
    }

    #[test]
    fn test_parse_integer_amount() {
        let tx = parse_line("2010-01-01 11:33:01 UTC,CCCC,CCCC,1000").unwrap();
        assert_eq!(tx.amount, 1000.0);
    }

    #[test]
    fn test_parse_amount_with_whitespace() {
        let tx = parse_line("2010-01-01 11:33:01 UTC,CCCC,CCCC, 12.5 ").unwrap();
        assert_eq!(tx.amount, 12.5);
    }

    #[test]
    fn test_from_str_matches_parse_line() {
        let line = "2022-01-02 13:55:09 UTC,BBBBBB,martha,1000.0";
        let tx: Transaction = line.parse().unwrap();
        assert_eq!(tx, parse_line(line).unwrap());
    }

    #[test]
    fn test_empty_identifiers_are_kept() {
        let tx = parse_line("2015-06-30 00:00:00 UTC,,,42").unwrap();
        assert_eq!(tx.origin, "");
        assert_eq!(tx.destination, "");
    }

    #[test]
    fn test_year_accessor() {
        let tx = parse_line("1995-09-10 05:23:00 UTC,martha,BBBBBB,1000").unwrap();
        assert_eq!(tx.year(), 1995);
    }

    #[test]
    fn test_rejects_missing_field() {
        let err = parse_line("2010-01-01 12:30:25 UTC,a,1000.0").unwrap_err();
        assert!(matches!(err, ParseError::FieldCount { found: 3 }));
    }

    #[test]
    fn test_rejects_extra_field() {
        let err = parse_line("2010-01-01 12:30:25 UTC,a,b,1000.0,x").unwrap_err();
        assert!(matches!(err, ParseError::FieldCount { found: 5 }));
    }

    #[test]
    fn test_rejects_missing_utc_suffix() {
        let err = parse_line("2010-01-01 12:30:25,a,topp,1000.0").unwrap_err();
        assert!(matches!(err, ParseError::Timestamp { .. }));
    }

    #[test]
    fn test_rejects_iso_timestamp() {
        let err = parse_line("2010-01-01T12:30:25Z,a,topp,1000.0").unwrap_err();
        assert!(matches!(err, ParseError::Timestamp { .. }));
    }

    #[test]
    fn test_rejects_impossible_date() {
        let err = parse_line("2010-02-30 12:30:25 UTC,a,topp,1000.0").unwrap_err();
        assert!(matches!(err, ParseError::Timestamp { .. }));
    }

    #[test]
    fn test_rejects_non_numeric_amount() {
        let err = parse_line("2010-01-01 12:30:25 UTC,a,topp,lots").unwrap_err();
        match err {
            ParseError::Amount { value, .. } => assert_eq!(value, "lots"),
            other => panic!("Expected Amount error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_empty_amount() {
        let err = parse_line("2010-01-01 12:30:25 UTC,a,topp,").unwrap_err();
        assert!(matches!(err, ParseError::Amount { .. }));
    }
}
