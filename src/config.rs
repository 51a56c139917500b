//! Pipeline settings.

/// Thresholds and input shape for a pipeline run.
///
/// `Default` gives the production behavior: amounts strictly above 20,
/// years from 2010 onward, and a header line on file input.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Records must have `amount > amount_threshold`.
    pub amount_threshold: f64,

    /// Records must have `timestamp.year() >= min_year`.
    pub min_year: i32,

    /// Skip the first line of a CSV source.
    pub skip_header: bool,
}

impl PipelineConfig {
    pub const DEFAULT_AMOUNT_THRESHOLD: f64 = 20.0;
    pub const DEFAULT_MIN_YEAR: i32 = 2010;
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            amount_threshold: Self::DEFAULT_AMOUNT_THRESHOLD,
            min_year: Self::DEFAULT_MIN_YEAR,
            skip_header: true,
        }
    }
}
