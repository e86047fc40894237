//! End-to-end runs of the summarizer over synthetic trial sets.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rta_analysis::{RtSummarizer, SummarizerConfig};
use rta_core::AnalysisError;
use rta_simulate::{generate_trials, SimulationConfig};

#[test]
fn recovers_the_simulation_targets_on_a_large_set() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = SimulationConfig::new(2.1, 0.9, 0.8).with_trials(10_000);
    let set = generate_trials(&config, &mut rng);

    let mut rta = RtSummarizer::new(SummarizerConfig::quiet());
    let summary = rta.summarize_set(&set).unwrap();

    assert!((summary.mean_rt - 2.1).abs() < 0.05);
    assert!((summary.mean_accuracy - 0.8).abs() < 0.05);
}

#[test]
fn recovers_targets_across_parameter_levels() {
    for (mean_rt, sd_rt, accuracy) in [(1.5, 0.5, 0.9), (15.0, 3.0, 0.9), (2.1, 0.9, 0.75)] {
        let mut rng = StdRng::seed_from_u64(1);
        let config = SimulationConfig::new(mean_rt, sd_rt, accuracy).with_trials(10_000);
        let set = generate_trials(&config, &mut rng);

        let mut rta = RtSummarizer::new(SummarizerConfig::quiet());
        let summary = rta.summarize_set(&set).unwrap();

        assert!(
            (summary.mean_rt - mean_rt).abs() < 0.05,
            "mean RT off target for ({mean_rt}, {sd_rt}, {accuracy})"
        );
        assert!((summary.mean_accuracy - accuracy).abs() < 0.05);
    }
}

#[test]
fn zero_accuracy_set_fails_only_for_lack_of_correct_trials() {
    let mut rng = StdRng::seed_from_u64(5);
    let config = SimulationConfig::new(1.5, 0.5, 0.0).with_trials(200);
    let set = generate_trials(&config, &mut rng);

    let mut rta = RtSummarizer::new(SummarizerConfig::quiet());
    let err = rta.summarize_set(&set).unwrap_err();

    // Zero accuracy itself is valid input; only the RT average is impossible.
    assert_eq!(err, AnalysisError::NoCorrectTrials);
    assert!(!err.is_invalid_input());
}

#[test]
fn truncated_correctness_series_is_rejected() {
    let mut rng = StdRng::seed_from_u64(9);
    let config = SimulationConfig::new(2.0, 0.5, 0.8).with_trials(20);
    let set = generate_trials(&config, &mut rng);

    // Omit the first flag, as a misaligned caller would.
    let truncated: Vec<bool> = set.correct.iter().skip(1).copied().collect();

    let mut rta = RtSummarizer::new(SummarizerConfig::quiet());
    let err = rta
        .summarize(set.response_times.clone(), truncated)
        .unwrap_err();
    assert_eq!(
        err,
        AnalysisError::LengthMismatch {
            response_times: 20,
            correct: 19
        }
    );
}

#[test]
fn outlier_cutoff_drops_extreme_trials_from_large_sets() {
    let mut rng = StdRng::seed_from_u64(13);
    let config = SimulationConfig::new(2.1, 0.3, 1.0).with_trials(1000);
    let set = generate_trials(&config, &mut rng);

    // Plant one extreme correct trial.
    let mut rt = set.response_times.clone().into_values();
    rt[0] = 100.0;
    let correct = set.correct.clone();

    let cutoff_config = SummarizerConfig::default().with_outlier_cutoff(2.0);
    let mut rta = RtSummarizer::with_sink(cutoff_config, Vec::new());
    let with_cutoff = rta.summarize(rt.clone(), correct.clone()).unwrap();

    let mut plain = RtSummarizer::new(SummarizerConfig::quiet());
    let without_cutoff = plain.summarize(rt, correct).unwrap();

    assert!(with_cutoff.mean_rt < without_cutoff.mean_rt);
    assert!((with_cutoff.mean_rt - 2.1).abs() < 0.05);
    assert_eq!(with_cutoff.mean_accuracy, without_cutoff.mean_accuracy);
    assert!(rta
        .sink()
        .iter()
        .any(|line| line.starts_with("Outlier rejection excluded")));
}

#[test]
fn summary_serializes_with_stable_field_names() {
    let mut rta = RtSummarizer::new(SummarizerConfig::quiet());
    let summary = rta.summarize(vec![1.0, 2.0], vec![true, true]).unwrap();

    let json: serde_json::Value = serde_json::to_value(summary).unwrap();
    assert_eq!(json["mean_rt"], 1.5);
    assert_eq!(json["mean_accuracy"], 1.0);
}
