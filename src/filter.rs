//! Record filters applied between parsing and aggregation.
//!
//! Rejected records are dropped without an error or a log line.

use crate::config::PipelineConfig;
use crate::transaction::Transaction;

/// `amount > threshold`. A value equal to the threshold is rejected.
pub fn amount_exceeds(tx: &Transaction, threshold: f64) -> bool {
    tx.amount > threshold
}

/// `year >= min_year`.
pub fn year_at_least(tx: &Transaction, min_year: i32) -> bool {
    tx.year() >= min_year
}

/// Both predicates, amount first then year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionFilter {
    amount_threshold: f64,
    min_year: i32,
}

impl TransactionFilter {
    pub fn new(amount_threshold: f64, min_year: i32) -> Self {
        TransactionFilter {
            amount_threshold,
            min_year,
        }
    }

    /// Returns `true` if the transaction should contribute to a daily total.
    pub fn accepts(&self, tx: &Transaction) -> bool {
        amount_exceeds(tx, self.amount_threshold) && year_at_least(tx, self.min_year)
    }
}

impl From<&PipelineConfig> for TransactionFilter {
    fn from(config: &PipelineConfig) -> Self {
        TransactionFilter::new(config.amount_threshold, config.min_year)
    }
}

impl Default for TransactionFilter {
    fn default() -> Self {
        TransactionFilter::from(&PipelineConfig::default())
    }
}
