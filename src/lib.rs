//! # Daily Totals
//!
//! A batch transform over transaction records: each line is parsed,
//! filtered by amount and year, grouped by calendar day, summed, and
//! rendered as one JSON object per day.
//!
//! ## Design Principles
//!
//! - **Strict input**: one malformed record fails the whole batch
//! - **Silent filtering**: amounts `<= 20` and years before 2010 are dropped
//! - **Mergeable reduction**: per-day sums combine across workers with [`DailyTotals::merge`]
//! - **Deterministic output**: days emitted in ascending date order
//!
//! ## Example
//!
//! ```
//! use daily_totals::transform;
//!
//! let lines = [
//!     "2010-01-01 12:30:25 UTC,a,topp,1000.0",
//!     "2010-01-01 11:33:01 UTC,CCCC,CCCC,1000",
//!     "2022-09-10 08:00:00 UTC,topp,a,20",
//! ];
//! let output = transform(lines).unwrap();
//! assert_eq!(output, vec![r#"{"date": "2010-01-01", "total_amount": 2000.0}"#]);
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod transaction;

pub use aggregate::{aggregate_parallel, DailyAggregate, DailyTotals};
pub use config::PipelineConfig;
pub use error::{ParseError, PipelineError, Result};
pub use filter::{amount_exceeds, year_at_least, TransactionFilter};
pub use output::{to_json_line, write_json, SpacedFormatter};
pub use pipeline::{transform, Pipeline};
pub use transaction::{parse_line, Transaction, TIMESTAMP_FORMAT};
