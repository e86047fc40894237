use thiserror::Error;

/// Failures raised while summarizing a trial set.
///
/// The first three variants are input-validation failures; `NoCorrectTrials`
/// is the documented policy for inputs that validate but leave nothing to
/// average. All failures are deterministic for a given input, so callers
/// should not retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("response times and correctness flags must be the same length ({response_times} vs {correct})")]
    LengthMismatch {
        response_times: usize,
        correct: usize,
    },

    #[error("invalid response time {value} at trial {index}; response times must be non-negative and finite")]
    InvalidResponseTime { index: usize, value: f64 },

    #[error("trial set is empty")]
    EmptyTrialSet,

    #[error("no correct trials to average")]
    NoCorrectTrials,
}

impl AnalysisError {
    /// True for validation failures, false for the zero-correct-trials policy error.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, AnalysisError::NoCorrectTrials)
    }
}
