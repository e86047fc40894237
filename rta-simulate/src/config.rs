use serde::{Deserialize, Serialize};

/// Targets for one synthetic trial set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Target mean response time for correct trials.
    pub mean_rt: f64,
    /// Target standard deviation of correct-trial response times.
    pub sd_rt: f64,
    /// Target fraction of correct trials, in [0, 1].
    pub mean_accuracy: f64,
    /// Number of trials to draw.
    pub trials: usize,
}

impl SimulationConfig {
    pub fn new(mean_rt: f64, sd_rt: f64, mean_accuracy: f64) -> Self {
        Self {
            mean_rt,
            sd_rt,
            mean_accuracy,
            trials: 100,
        }
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }
}
