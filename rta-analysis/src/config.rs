use serde::{Deserialize, Serialize};

/// Summarizer options, fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Print the computed means after a successful run. Output only; never
    /// changes computed values.
    pub verbose: bool,
    /// When set, correct trials whose response time exceeds
    /// `mean + cutoff * sample_sd` of the correct-trial response times are
    /// excluded from the response-time mean. Must be positive. Accuracy is
    /// never affected.
    pub outlier_cutoff_sd: Option<f64>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            verbose: true,
            outlier_cutoff_sd: None,
        }
    }
}

impl SummarizerConfig {
    /// Default options with reporting turned off.
    pub fn quiet() -> Self {
        Self {
            verbose: false,
            ..Self::default()
        }
    }

    /// Enable outlier rejection at `cutoff_sd` standard deviations above the
    /// mean. Panics unless `cutoff_sd` is positive and finite.
    pub fn with_outlier_cutoff(mut self, cutoff_sd: f64) -> Self {
        assert!(
            cutoff_sd > 0.0 && cutoff_sd.is_finite(),
            "outlier cutoff must be a positive, finite number of standard deviations, got {cutoff_sd}"
        );
        self.outlier_cutoff_sd = Some(cutoff_sd);
        self
    }
}
