//! algo-bench — differential verification and empirical complexity scoring.
//!
//! Several implementations of the same algorithm are registered with a
//! `Harness`. A run checks them against hand-written fixed cases, then feeds
//! all of them identical random inputs, checking every answer against
//! implementation 0 and timing each call. The timing series are scored
//! against four growth shapes:
//!
//!   logN  → R²(elapsed, ln n)
//!   N     → R²(elapsed, n)
//!   NlogN → R²(elapsed, n·ln n)
//!   N*N   → R²(elapsed, n²)
//!
//! ```no_run
//! use algo_bench::harness::Harness;
//! use algo_bench::types::RunConfig;
//!
//! let config = RunConfig::new("sum", 1, 1000, 0i64, 100).with_seed(7);
//! let mut harness: Harness<i64, i64> = Harness::new(config)?;
//! harness.register_fixed_case(vec![1, 2, 3], 6);
//! harness.register_implementation(|a: &[i64]| a.iter().sum());
//! harness.register_implementation(|a: &[i64]| a.iter().fold(0, |s, x| s + x));
//! let report = harness.run_trials(200)?;
//! println!("{report}");
//! # Ok::<(), algo_bench::errors::HarnessError>(())
//! ```

pub mod errors;
pub mod types;
pub mod generator;
pub mod oracle;
pub mod classifier;
pub mod harness;
pub mod report;
pub mod catalog;
