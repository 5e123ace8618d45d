//! Latency: cost of merging sorted files of the given lengths one by one.
//!
//! The optimized solution is the reference; the naive one only bounds the
//! cost from above, so the oracle accepts `optimized <= naive`.

use crate::errors::Result;
use crate::harness::Harness;
use crate::oracle::AtMost;
use crate::types::RunConfig;

pub const NAME: &str = "TestLatency";

pub fn config() -> RunConfig<i64> {
    RunConfig::new(NAME, 1, 10, 1, 1000)
}

/// Upper bound: every merge re-reads the running total twice.
pub fn naive(a: &[i64]) -> i64 {
    if a.len() < 2 {
        return 0;
    }
    a[1..].iter().fold(a[0], |sum, &x| sum + sum + x)
}

/// Merge smallest files first.
pub fn shortest_first(a: &[i64]) -> i64 {
    let n = a.len() as i64;
    if n < 2 {
        return 0;
    }
    let mut sorted = a.to_vec();
    sorted.sort_unstable();
    let mut total = sorted[0] * (n - 1);
    for (i, &x) in sorted.iter().enumerate().skip(1) {
        total += x * (n - i as i64);
    }
    total
}

pub fn harness(seed: Option<u64>) -> Result<Harness<i64, i64>> {
    let mut cfg = config();
    cfg.seed = seed;
    let mut h = Harness::new(cfg)?.with_oracle(AtMost);
    h.register_named_implementation("shortest_first", shortest_first);
    h.register_named_implementation("naive", naive);
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_inputs() {
        assert_eq!(naive(&[42]), 0);
        assert_eq!(shortest_first(&[42]), 0);
        // merge 100+250, then 350+1000
        assert_eq!(shortest_first(&[1000, 100, 250]), 1700);
        assert_eq!(naive(&[100, 250, 1000]), 1900);
    }

    #[test]
    fn optimized_never_exceeds_naive() {
        let inputs: [&[i64]; 4] = [&[5, 1], &[3, 3, 3], &[1000, 1, 999, 2], &[7, 6, 5, 4, 3, 2, 1]];
        for a in inputs {
            assert!(shortest_first(a) <= naive(a), "input {a:?}");
        }
    }
}
