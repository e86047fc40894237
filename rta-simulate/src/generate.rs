use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Weibull};
use rta_core::{stats, TrialSet};

use crate::config::SimulationConfig;

/// Draw a synthetic trial set approximating the configured targets.
///
/// Response times start as Weibull(shape 2) draws offset by 1.0. Exactly
/// `round(trials * mean_accuracy)` trials are flagged correct, at shuffled
/// positions, and the correct trials' response times are rescaled so their
/// sample mean and sample SD hit the targets exactly; incorrect trials keep
/// their raw draws. Targets that put the lower tail below zero (sd_rt large
/// relative to mean_rt) can produce response times the summarizer rejects.
pub fn generate_trials<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> TrialSet {
    let n = config.trials;
    let weibull = Weibull::new(1.0, 2.0).expect("Weibull parameters are fixed and positive");
    let mut response_times: Vec<f64> = (0..n).map(|_| weibull.sample(rng) + 1.0).collect();

    let n_correct = ((n as f64) * config.mean_accuracy).round() as usize;
    let mut correct: Vec<bool> = (0..n).map(|i| i < n_correct).collect();
    correct.shuffle(rng);

    rescale_correct(&mut response_times, &correct, config);

    TrialSet::new(response_times, correct)
}

/// Shift and scale the correct-trial response times onto the target mean/SD.
fn rescale_correct(response_times: &mut [f64], correct: &[bool], config: &SimulationConfig) {
    let correct_rts: Vec<f64> = response_times
        .iter()
        .zip(correct)
        .filter(|(_, &flag)| flag)
        .map(|(&rt, _)| rt)
        .collect();
    // Below two correct trials there is no spread to rescale.
    if correct_rts.len() < 2 {
        return;
    }
    let m = stats::mean(&correct_rts);
    let s = stats::stddev_sample(&correct_rts);
    if s == 0.0 {
        return;
    }
    let scale = config.sd_rt / s;
    for (rt, &flag) in response_times.iter_mut().zip(correct) {
        if flag {
            *rt = (*rt - m) * scale + config.mean_rt;
        }
    }
}
