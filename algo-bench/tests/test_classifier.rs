//! Complexity classifier tests on synthetic timing series.

use algo_bench::classifier::{classify, r_squared, GrowthShape};
use algo_bench::types::Observation;

fn synthetic(t: impl Fn(f64) -> f64) -> Vec<Observation> {
    (1..=1000)
        .map(|n| Observation::new(n, t(n as f64).round() as u64))
        .collect()
}

#[test]
fn linear_series_scores_linear() {
    let obs = synthetic(|n| 3.0 * n);
    let profile = classify(&obs);

    let linear = profile.score(GrowthShape::Linear).unwrap();
    assert!(linear > 99.999, "linear {linear}");

    let log = profile.score(GrowthShape::Log).unwrap();
    let nlogn = profile.score(GrowthShape::Linearithmic).unwrap();
    let quad = profile.score(GrowthShape::Quadratic).unwrap();
    assert!(log < 80.0, "log {log}");
    assert!(nlogn < 99.9, "nlogn {nlogn}");
    assert!(quad < 95.0, "quadratic {quad}");
    assert_eq!(profile.best_fit(), Some(GrowthShape::Linear));
}

#[test]
fn quadratic_series_scores_quadratic() {
    let obs = synthetic(|n| 2.0 * n * n);
    let profile = classify(&obs);

    let quad = profile.score(GrowthShape::Quadratic).unwrap();
    assert!(quad > 99.999, "quadratic {quad}");
    assert!(profile.score(GrowthShape::Linear).unwrap() < 95.0);
    assert_eq!(profile.best_fit(), Some(GrowthShape::Quadratic));
}

#[test]
fn linearithmic_and_log_series() {
    let obs = synthetic(|n| 5.0 * n * n.ln());
    let nlogn = r_squared(&obs, GrowthShape::Linearithmic).unwrap();
    assert!(nlogn > 99.99, "nlogn {nlogn}");
    assert_eq!(classify(&obs).best_fit(), Some(GrowthShape::Linearithmic));

    let obs = synthetic(|n| 1000.0 * n.ln());
    assert_eq!(classify(&obs).best_fit(), Some(GrowthShape::Log));
}

#[test]
fn noisy_linear_still_ranks_linear_first() {
    // Deterministic jitter of about ±5%.
    let obs: Vec<Observation> = (1..=1000u64)
        .map(|n| {
            let jitter = ((n * 7919) % 101) as f64 / 100.0 - 0.5;
            let t = 40.0 * n as f64 * (1.0 + 0.1 * jitter);
            Observation::new(n as usize, t as u64)
        })
        .collect();
    let profile = classify(&obs);
    assert!(profile.score(GrowthShape::Linear).unwrap() > 99.0);
    assert_eq!(profile.best_fit(), Some(GrowthShape::Linear));
}

#[test]
fn scores_stay_in_percentage_range() {
    let obs = synthetic(|n| 1.0e6 / n);
    for s in classify(&obs).scores {
        let score = s.score.unwrap();
        assert!((0.0..=100.0).contains(&score), "{:?} {score}", s.shape);
    }
}
