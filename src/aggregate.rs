//! Per-day reduction of filtered transactions.
//!
//! [`DailyTotals`] is a map from calendar date to running sum. Two partial
//! maps built over disjoint inputs combine with [`DailyTotals::merge`], which
//! is what [`aggregate_parallel`] relies on: every rayon worker folds into
//! its own map and the maps are merged pairwise at the end.

use crate::error::{PipelineError, Result};
use crate::filter::TransactionFilter;
use crate::transaction::{parse_line, Transaction};
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

/// Sum of surviving transaction amounts for one calendar date.
///
/// Field order is the output field order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub total_amount: f64,
}

/// Running per-date sums.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyTotals {
    totals: HashMap<NaiveDate, f64>,
}

impl DailyTotals {
    pub fn new() -> Self {
        DailyTotals {
            totals: HashMap::new(),
        }
    }

    /// Adds the transaction's amount to its date's sum.
    pub fn add(&mut self, tx: &Transaction) {
        *self.totals.entry(tx.date()).or_insert(0.0) += tx.amount;
    }

    /// Combines two partial reductions.
    pub fn merge(mut self, mut other: DailyTotals) -> DailyTotals {
        if other.totals.len() > self.totals.len() {
            std::mem::swap(&mut self, &mut other);
        }
        for (date, amount) in other.totals {
            *self.totals.entry(date).or_insert(0.0) += amount;
        }
        self
    }

    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.totals.get(&date).copied()
    }

    /// Number of distinct dates seen.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Finalizes the reduction, one aggregate per date in ascending date order.
    pub fn into_aggregates(self) -> Vec<DailyAggregate> {
        let mut aggregates: Vec<DailyAggregate> = self
            .totals
            .into_iter()
            .map(|(date, total_amount)| DailyAggregate { date, total_amount })
            .collect();
        aggregates.sort_by_key(|a| a.date);
        aggregates
    }
}

impl<'a> Extend<&'a Transaction> for DailyTotals {
    fn extend<I: IntoIterator<Item = &'a Transaction>>(&mut self, iter: I) {
        for tx in iter {
            self.add(tx);
        }
    }
}

impl<'a> FromIterator<&'a Transaction> for DailyTotals {
    fn from_iter<I: IntoIterator<Item = &'a Transaction>>(iter: I) -> Self {
        let mut totals = DailyTotals::new();
        totals.extend(iter);
        totals
    }
}

/// Parses, filters and sums `lines` across the rayon thread pool.
///
/// `lines` holds records only (no header). Rows in errors are 1-based
/// positions in `lines`. When several lines are malformed, which one is
/// reported depends on scheduling.
pub fn aggregate_parallel<S>(lines: &[S], filter: &TransactionFilter) -> Result<DailyTotals>
where
    S: AsRef<str> + Sync,
{
    lines
        .par_iter()
        .enumerate()
        .try_fold(DailyTotals::new, |mut totals, (idx, line)| {
            let tx = parse_line(line.as_ref()).map_err(|source| PipelineError::InvalidRecord {
                row: idx + 1,
                source,
            })?;
            if filter.accepts(&tx) {
                totals.add(&tx);
            }
            Ok::<_, PipelineError>(totals)
        })
        .try_reduce(DailyTotals::new, |a, b| Ok(a.merge(b)))
}
