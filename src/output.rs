//! JSON rendering of daily aggregates.
//!
//! Lines look like `{"date": "2010-01-01", "total_amount": 2000.0}`: a single
//! space after `:` and `,`, nothing else, no trailing newline.

use crate::aggregate::DailyAggregate;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

/// Compact JSON with `", "` and `": "` separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Writes one aggregate as JSON to `writer`.
pub fn write_json<W: io::Write>(writer: W, aggregate: &DailyAggregate) -> serde_json::Result<()> {
    let mut serializer = Serializer::with_formatter(writer, SpacedFormatter);
    aggregate.serialize(&mut serializer)
}

/// Renders one aggregate as a JSON object string.
pub fn to_json_line(aggregate: &DailyAggregate) -> serde_json::Result<String> {
    let mut buf = Vec::with_capacity(48);
    write_json(&mut buf, aggregate)?;
    // serde_json only emits valid UTF-8
    String::from_utf8(buf).map_err(|e| serde::ser::Error::custom(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn aggregate(y: i32, m: u32, d: u32, total_amount: f64) -> DailyAggregate {
        DailyAggregate {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            total_amount,
        }
    }

    #[test]
    fn test_whole_number_keeps_decimal_point() {
        let line = to_json_line(&aggregate(2010, 1, 1, 2000.0)).unwrap();
        assert_eq!(line, r#"{"date": "2010-01-01", "total_amount": 2000.0}"#);
    }

    #[test]
    fn test_fractional_amount() {
        let line = to_json_line(&aggregate(2022, 9, 10, 20.01)).unwrap();
        assert_eq!(line, r#"{"date": "2022-09-10", "total_amount": 20.01}"#);
    }

    #[test]
    fn test_date_is_zero_padded() {
        let line = to_json_line(&aggregate(2015, 3, 7, 21.5)).unwrap();
        assert!(line.starts_with(r#"{"date": "2015-03-07""#));
    }

    #[test]
    fn test_output_parses_back_as_json() {
        let line = to_json_line(&aggregate(2012, 12, 31, 123.25)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["date"], "2012-12-31");
        assert_eq!(value["total_amount"], 123.25);
    }

    #[test]
    fn test_no_trailing_newline() {
        let line = to_json_line(&aggregate(2010, 1, 1, 30.0)).unwrap();
        assert!(!line.ends_with('\n'));
    }

    #[test]
    fn test_array_separator() {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
        vec![1, 2, 3].serialize(&mut serializer).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[1, 2, 3]");
    }
}
