use serde::{Deserialize, Serialize};

use crate::series::Series;

/// Paired per-trial observations, aligned by index.
///
/// Index *i* in both series refers to the same trial. The pair is plain
/// data; length and value validation happens in the summarizer so that no
/// trial is dropped before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialSet {
    pub response_times: Series<f64>,
    pub correct: Series<bool>,
}

impl TrialSet {
    pub fn new(
        response_times: impl Into<Series<f64>>,
        correct: impl Into<Series<bool>>,
    ) -> Self {
        Self {
            response_times: response_times.into(),
            correct: correct.into(),
        }
    }

    /// Trial count as recorded on the response-time side.
    pub fn len(&self) -> usize {
        self.response_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.response_times.is_empty()
    }
}
