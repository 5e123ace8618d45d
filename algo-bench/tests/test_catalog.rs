//! End-to-end runs of the catalog harnesses.

use algo_bench::catalog::{binarian, count_bits, latency};
use algo_bench::errors::{HarnessError, MismatchSite};
use algo_bench::harness::Harness;
use algo_bench::oracle::{AtMost, Equivalence};

// ===========================================================================
// Binarian
// ===========================================================================

#[test]
fn binarian_fixed_case_and_random_trials_agree() {
    let mut h = binarian::harness(Some(42)).unwrap();
    assert_eq!(h.name(), binarian::NAME);
    assert_eq!(h.fixed_case_count(), 1);
    assert_eq!(h.implementation_count(), 2);

    let report = h.run_trials(300).unwrap();

    assert_eq!(report.fixed_cases, 1);
    for index in 0..2 {
        let series = h.observations(index).unwrap();
        assert_eq!(series.len(), 300);
        assert!(series.iter().all(|o| (1..=1000).contains(&o.size)));
    }
    assert_eq!(report.candidates[0].label, "naive");
    assert_eq!(report.candidates[1].label, "carried");

    let text = report.to_string();
    assert_eq!(text.lines().count(), 5, "{text}");
    assert!(text.contains("  |  logN|     N| NlogN|   N*N|"));
}

// ===========================================================================
// CountBits
// ===========================================================================

#[test]
fn count_bits_runs_on_sorted_unique_inputs() {
    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let mut h = count_bits::harness(Some(7)).unwrap();
    let log = std::rc::Rc::clone(&seen);
    h.register_named_implementation("observer", move |a: &[u32]| {
        log.borrow_mut().push(a.to_vec());
        count_bits::naive(a)
    });

    h.run_trials(500).unwrap();

    let inputs = seen.borrow();
    // fixed case plus every trial
    assert_eq!(inputs.len(), 501);
    assert_eq!(inputs[0], vec![1, 4, 5]);
    for a in inputs.iter() {
        assert!(!a.is_empty());
        assert!(a.windows(2).all(|w| w[0] < w[1]), "{a:?}");
        assert!(a.iter().all(|&x| x <= 14));
    }
}

// ===========================================================================
// Latency
// ===========================================================================

#[test]
fn latency_accepts_optimized_at_most_naive() {
    let mut h = latency::harness(Some(3)).unwrap();
    h.register_fixed_case(vec![100, 250, 1000], 1900);
    let report = h.run_trials(500).unwrap();
    assert_eq!(report.candidates.len(), 2);
    assert_eq!(h.observations(1).unwrap().len(), 500);

    assert!(AtMost.equivalent(&latency::shortest_first(&[1000, 100, 250]), &1900));
}

#[test]
fn latency_rejects_result_above_reference() {
    let mut h: Harness<i64, i64> = Harness::new(latency::config().with_seed(11))
        .unwrap()
        .with_oracle(AtMost);
    h.register_named_implementation("inflated", |a: &[i64]| latency::naive(a) + 1);
    h.register_named_implementation("naive", latency::naive);

    let err = h.run_trials(100).unwrap_err();
    match err {
        HarnessError::CandidateDisagreement(m) => {
            assert_eq!(m.site, MismatchSite::Trial(0));
            assert_eq!(m.index, 1);
            let reference: i64 = m.expected.parse().unwrap();
            let actual: i64 = m.actual.parse().unwrap();
            assert_eq!(reference, actual + 1);
        }
        other => panic!("expected disagreement, got {other:?}"),
    }
    assert!(h.observations(0).unwrap().is_empty());
}

#[test]
fn latency_fixed_case_enforces_upper_bound() {
    let mut h = latency::harness(Some(1)).unwrap();
    h.register_fixed_case(vec![100, 250, 1000], 1800);

    match h.run_trials(10) {
        Err(HarnessError::FixedCaseMismatch(m)) => {
            assert_eq!(m.index, 1, "only the naive bound exceeds 1800");
            assert_eq!(m.actual, "1900");
        }
        other => panic!("expected fixed-case mismatch, got {other:?}"),
    }
}
