//! Core data model: Element, Observation, FixedCase, RunConfig.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{HarnessError, Result};

/// Default number of randomized trials per `run`.
pub const DEFAULT_TRIALS: usize = 1000;

// ---------------------------------------------------------------------------
// Element — a scalar that can populate a generated input sequence
// ---------------------------------------------------------------------------

pub trait Element: Copy + PartialOrd + fmt::Debug + 'static {
    /// Map a raw 64-bit draw onto `[lo, hi]` (inclusive) by modulo reduction.
    ///
    /// The result is slightly biased towards the low end of the range when
    /// the span does not divide 2^64; only variety is needed here.
    fn from_draw(raw: u64, lo: Self, hi: Self) -> Self;
}

macro_rules! impl_element_int {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            fn from_draw(raw: u64, lo: Self, hi: Self) -> Self {
                debug_assert!(lo <= hi);
                let span = (hi as i128 - lo as i128) as u128 + 1;
                (lo as i128 + (raw as u128 % span) as i128) as $t
            }
        }
    )*};
}

impl_element_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Inclusive modulo draw on `usize`, shared by size and value draws.
pub(crate) fn draw_between(raw: u64, lo: usize, hi: usize) -> usize {
    usize::from_draw(raw, lo, hi)
}

// ---------------------------------------------------------------------------
// Observation — one (input size, elapsed time) sample
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub size: usize,
    pub elapsed_ns: u64,
}

impl Observation {
    pub fn new(size: usize, elapsed_ns: u64) -> Self {
        Self { size, elapsed_ns }
    }
}

// ---------------------------------------------------------------------------
// FixedCase — hand-written (input, expected) correctness gate
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct FixedCase<T, R> {
    pub input: Vec<T>,
    pub expected: R,
}

// ---------------------------------------------------------------------------
// RunConfig
// ---------------------------------------------------------------------------

/// Bounds and identity of one harness. Fixed once the harness is built.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunConfig<T> {
    pub name: String,
    pub min_size: usize,
    pub max_size: usize,
    pub min_value: T,
    pub max_value: T,
    pub trials: usize,
    /// `None` seeds the generator from OS entropy.
    pub seed: Option<u64>,
}

impl<T: Element> RunConfig<T> {
    pub fn new(name: &str, min_size: usize, max_size: usize, min_value: T, max_value: T) -> Self {
        Self {
            name: name.to_string(),
            min_size,
            max_size,
            min_value,
            max_value,
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_size == 0 {
            return Err(HarnessError::InvalidConfig(format!(
                "'{}': min_size must be >= 1",
                self.name
            )));
        }
        if self.min_size > self.max_size {
            return Err(HarnessError::InvalidConfig(format!(
                "'{}': min_size {} exceeds max_size {}",
                self.name, self.min_size, self.max_size
            )));
        }
        if self.min_value > self.max_value {
            return Err(HarnessError::InvalidConfig(format!(
                "'{}': min_value {:?} exceeds max_value {:?}",
                self.name, self.min_value, self.max_value
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_covers_inclusive_bounds() {
        assert_eq!(i32::from_draw(0, -3, 3), -3);
        assert_eq!(i32::from_draw(6, -3, 3), 3);
        assert_eq!(i32::from_draw(7, -3, 3), -3);
        assert_eq!(u8::from_draw(u64::MAX, 0, 255), 255);
        assert_eq!(draw_between(41, 1, 10), 2);
    }

    #[test]
    fn draw_handles_full_width_ranges() {
        assert_eq!(u64::from_draw(u64::MAX, 0, u64::MAX), u64::MAX);
        assert_eq!(i64::from_draw(0, i64::MIN, i64::MAX), i64::MIN);
    }

    #[test]
    fn config_validation() {
        assert!(RunConfig::new("ok", 1, 10, 0i32, 5).validate().is_ok());
        assert!(RunConfig::new("zero", 0, 10, 0i32, 5).validate().is_err());
        assert!(RunConfig::new("sizes", 5, 4, 0i32, 5).validate().is_err());
        assert!(RunConfig::new("values", 1, 4, 6i32, 5).validate().is_err());
    }

    #[test]
    fn config_defaults() {
        let cfg = RunConfig::new("d", 1, 2, 0u32, 1).with_seed(9);
        assert_eq!(cfg.trials, DEFAULT_TRIALS);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.with_trials(3).trials, 3);
    }
}
