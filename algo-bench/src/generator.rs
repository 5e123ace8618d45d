//! Input generators — produce one fully materialized input per trial.
//!
//! `RandomArray` is the default: it draws a length from the configured size
//! range, then fills it with values from the configured value range, both by
//! modulo reduction of a `ChaCha8Rng` stream. Algorithm families with input
//! preconditions wrap it (`SortedUnique`) or supply a closure (`from_fn`).

use std::cmp::Ordering;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{draw_between, Element, RunConfig};

pub trait InputGenerator<T> {
    /// Produce one input. `None` or `Some(0)` draws the length from the
    /// configured size range; any other value fixes the length.
    fn generate(&mut self, size: Option<usize>) -> Vec<T>;
}

impl<T, G: InputGenerator<T> + ?Sized> InputGenerator<T> for Box<G> {
    fn generate(&mut self, size: Option<usize>) -> Vec<T> {
        (**self).generate(size)
    }
}

// ---------------------------------------------------------------------------
// RandomArray
// ---------------------------------------------------------------------------

pub struct RandomArray<T> {
    min_size: usize,
    max_size: usize,
    min_value: T,
    max_value: T,
    rng: ChaCha8Rng,
}

impl<T: Element> RandomArray<T> {
    /// Build with an explicit random source.
    pub fn new(config: &RunConfig<T>, rng: ChaCha8Rng) -> Self {
        Self {
            min_size: config.min_size,
            max_size: config.max_size,
            min_value: config.min_value,
            max_value: config.max_value,
            rng,
        }
    }

    pub fn seeded(config: &RunConfig<T>, seed: u64) -> Self {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seeded from `config.seed` when set, otherwise from OS entropy.
    pub fn from_config(config: &RunConfig<T>) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(config, seed),
            None => Self::new(config, ChaCha8Rng::from_entropy()),
        }
    }
}

impl<T: Element> InputGenerator<T> for RandomArray<T> {
    fn generate(&mut self, size: Option<usize>) -> Vec<T> {
        let len = match size {
            Some(n) if n > 0 => n,
            _ => draw_between(self.rng.next_u64(), self.min_size, self.max_size),
        };
        (0..len)
            .map(|_| T::from_draw(self.rng.next_u64(), self.min_value, self.max_value))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// SortedUnique — strictly increasing inputs
// ---------------------------------------------------------------------------

/// Sorts and de-duplicates whatever the inner generator produces.
///
/// The output can be shorter than the requested size.
pub struct SortedUnique<G> {
    inner: G,
}

impl<G> SortedUnique<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }
}

impl<T: Element, G: InputGenerator<T>> InputGenerator<T> for SortedUnique<G> {
    fn generate(&mut self, size: Option<usize>) -> Vec<T> {
        let mut values = self.inner.generate(size);
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        values.dedup();
        values
    }
}

// ---------------------------------------------------------------------------
// FromFn
// ---------------------------------------------------------------------------

pub struct FromFn<F>(F);

/// Wrap a closure as a generator.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut(Option<usize>) -> Vec<T>,
{
    FromFn(f)
}

impl<T, F> InputGenerator<T> for FromFn<F>
where
    F: FnMut(Option<usize>) -> Vec<T>,
{
    fn generate(&mut self, size: Option<usize>) -> Vec<T> {
        (self.0)(size)
    }
}
