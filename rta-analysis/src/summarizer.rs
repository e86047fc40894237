use rta_core::{stats, AnalysisError, Series, TrialSet};
use serde::{Deserialize, Serialize};

use crate::config::SummarizerConfig;
use crate::report::{ReportSink, StdoutSink};

/// Result of one summarize call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Mean response time over retained correct trials.
    pub mean_rt: f64,
    /// Fraction of all trials flagged correct, in [0, 1].
    pub mean_accuracy: f64,
}

/// Reduces a trial set to mean response time and mean accuracy.
///
/// One-shot per call: `summarize` recomputes from scratch and overwrites the
/// stored means, so the latest result stays readable on the instance without
/// keeping the returned [`Summary`]. A failed call clears them. Calls must
/// be serialized; the instance holds no other mutable state.
pub struct RtSummarizer<K: ReportSink = StdoutSink> {
    config: SummarizerConfig,
    sink: K,
    mean_rt: Option<f64>,
    mean_accuracy: Option<f64>,
}

impl RtSummarizer<StdoutSink> {
    pub fn new(config: SummarizerConfig) -> Self {
        Self::with_sink(config, StdoutSink)
    }
}

impl<K: ReportSink> RtSummarizer<K> {
    pub fn with_sink(config: SummarizerConfig, sink: K) -> Self {
        Self {
            config,
            sink,
            mean_rt: None,
            mean_accuracy: None,
        }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Mean response time from the most recent successful call.
    pub fn mean_rt(&self) -> Option<f64> {
        self.mean_rt
    }

    /// Mean accuracy from the most recent successful call.
    pub fn mean_accuracy(&self) -> Option<f64> {
        self.mean_accuracy
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Validate paired observations and compute both means.
    ///
    /// `mean_accuracy` is taken over all trials; `mean_rt` over correct
    /// trials only, minus any configured outlier rejection. Fails with
    /// [`AnalysisError::NoCorrectTrials`] when no trial is flagged correct;
    /// an accuracy of exactly zero is otherwise valid input.
    pub fn summarize(
        &mut self,
        response_times: impl Into<Series<f64>>,
        correct: impl Into<Series<bool>>,
    ) -> Result<Summary, AnalysisError> {
        // No partial results: stored means stay cleared on any failure.
        self.mean_rt = None;
        self.mean_accuracy = None;

        let response_times: Series<f64> = response_times.into();
        let correct: Series<bool> = correct.into();

        if response_times.len() != correct.len() {
            return Err(AnalysisError::LengthMismatch {
                response_times: response_times.len(),
                correct: correct.len(),
            });
        }
        if response_times.is_empty() {
            return Err(AnalysisError::EmptyTrialSet);
        }
        for (index, &value) in response_times.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(AnalysisError::InvalidResponseTime { index, value });
            }
        }

        // Correct/incorrect split over the full, unfiltered trial set.
        let n_correct = correct.iter().filter(|&&flag| flag).count();
        let mean_accuracy = n_correct as f64 / correct.len() as f64;

        let mut correct_rts: Vec<f64> = response_times
            .iter()
            .zip(correct.iter())
            .filter(|(_, &flag)| flag)
            .map(|(&rt, _)| rt)
            .collect();

        if let Some(cutoff_sd) = self.config.outlier_cutoff_sd {
            self.reject_outliers(&mut correct_rts, cutoff_sd);
        }

        if correct_rts.is_empty() {
            return Err(AnalysisError::NoCorrectTrials);
        }

        let mean_rt = stats::mean(&correct_rts);

        if self.config.verbose {
            self.sink.line(&format!("mean RT: {mean_rt}"));
            self.sink.line(&format!("mean accuracy: {mean_accuracy}"));
        }

        self.mean_rt = Some(mean_rt);
        self.mean_accuracy = Some(mean_accuracy);
        Ok(Summary {
            mean_rt,
            mean_accuracy,
        })
    }

    /// [`summarize`](Self::summarize) over an already-paired trial set.
    pub fn summarize_set(&mut self, trials: &TrialSet) -> Result<Summary, AnalysisError> {
        self.summarize(trials.response_times.clone(), trials.correct.clone())
    }

    fn reject_outliers(&mut self, correct_rts: &mut Vec<f64>, cutoff_sd: f64) {
        // Sample SD needs at least two observations; nothing to reject below that.
        if correct_rts.len() < 2 {
            return;
        }
        let cutoff =
            stats::mean(correct_rts) + cutoff_sd * stats::stddev_sample(correct_rts);
        let before = correct_rts.len();
        correct_rts.retain(|&rt| rt <= cutoff);
        if self.config.verbose {
            self.sink.line(&format!(
                "Outlier rejection excluded {} trials.",
                before - correct_rts.len()
            ));
        }
    }
}

impl Default for RtSummarizer<StdoutSink> {
    fn default() -> Self {
        Self::new(SummarizerConfig::default())
    }
}
