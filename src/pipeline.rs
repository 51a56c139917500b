//! Batch pipeline: parse, filter, group by day, sum, serialize.
//!
//! Processing is strict. The first malformed record aborts the run and
//! nothing is emitted, since output is only produced once the whole input
//! has been reduced.

use crate::aggregate::{DailyAggregate, DailyTotals};
use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::filter::TransactionFilter;
use crate::output::{to_json_line, write_json};
use crate::transaction::{parse_line, Transaction};
use log::{debug, info};
use std::io::{BufRead, Write};

/// Streaming driver over a line-oriented CSV source.
///
/// Records are read one at a time; only the per-date sums are kept.
pub struct Pipeline {
    config: PipelineConfig,
    filter: TransactionFilter,
    totals: DailyTotals,
    rows_read: usize,
    rows_kept: usize,
}

impl Pipeline {
    /// Creates a pipeline with the default thresholds.
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    pub fn with_config(config: PipelineConfig) -> Self {
        Pipeline {
            filter: TransactionFilter::from(&config),
            config,
            totals: DailyTotals::new(),
            rows_read: 0,
            rows_kept: 0,
        }
    }

    /// Reads every record from `reader` into the running totals.
    ///
    /// Each physical line is one record, split on plain commas. When
    /// `skip_header` is set the first physical line is dropped whatever it
    /// contains. Any later line, blank ones included, must parse. A newline
    /// at the very end of the input does not start another record.
    pub fn process_csv<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let skip = usize::from(self.config.skip_header);

        for (idx, line) in reader.lines().enumerate().skip(skip) {
            let line = line?;
            self.process_line(&line, idx + 1)?;
        }

        info!(
            "Read {} transactions, {} passed filters, {} distinct days",
            self.rows_read,
            self.rows_kept,
            self.totals.len()
        );
        Ok(())
    }

    /// Adds one raw record line (no header handling).
    ///
    /// `row` is only used to label a parse error.
    pub fn process_line(&mut self, line: &str, row: usize) -> Result<()> {
        let tx =
            parse_line(line).map_err(|source| PipelineError::InvalidRecord { row, source })?;
        self.accept(&tx);
        Ok(())
    }

    fn accept(&mut self, tx: &Transaction) {
        self.rows_read += 1;
        if self.filter.accepts(tx) {
            self.rows_kept += 1;
            self.totals.add(tx);
        }
    }

    /// Number of records parsed so far.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Number of records that passed both filters.
    pub fn rows_kept(&self) -> usize {
        self.rows_kept
    }

    /// Ends the run, returning the per-date aggregates in date order.
    pub fn finish(self) -> Vec<DailyAggregate> {
        self.totals.into_aggregates()
    }

    /// Ends the run and writes one JSON object per line to `writer`.
    pub fn write_output<W: Write>(self, mut writer: W) -> Result<()> {
        let aggregates = self.finish();
        debug!("Writing {} daily totals", aggregates.len());

        for aggregate in &aggregates {
            write_json(&mut writer, aggregate)?;
            writer.write_all(b"\n")?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the full transform over record lines with the default thresholds.
///
/// `lines` holds records only. Returns one JSON string per surviving date,
/// ordered by date. Error rows are 1-based positions in `lines`.
pub fn transform<'a, I>(lines: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut pipeline = Pipeline::new();
    for (idx, line) in lines.into_iter().enumerate() {
        pipeline.process_line(line, idx + 1)?;
    }

    pipeline
        .finish()
        .iter()
        .map(|aggregate| to_json_line(aggregate).map_err(PipelineError::from))
        .collect()
}
