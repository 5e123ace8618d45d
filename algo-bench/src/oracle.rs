//! Equivalence oracles — decide whether two results count as the same answer.
//!
//! Argument order is fixed by the harness:
//!   fixed case        → `equivalent(actual, expected)`
//!   randomized trial  → `equivalent(reference_output, candidate_output)`
//! so asymmetric oracles such as `AtMost` read "lhs is admissible against rhs".

use std::fmt;

pub trait Equivalence<R> {
    fn equivalent(&self, lhs: &R, rhs: &R) -> bool;
}

/// Exact value equality. The default.
#[derive(Clone, Copy, Debug, Default)]
pub struct Exact;

impl<R: PartialEq> Equivalence<R> for Exact {
    fn equivalent(&self, lhs: &R, rhs: &R) -> bool {
        lhs == rhs
    }
}

/// `lhs <= rhs`: the left result is admissible when it does not exceed the right one.
#[derive(Clone, Copy, Debug, Default)]
pub struct AtMost;

impl<R: PartialOrd> Equivalence<R> for AtMost {
    fn equivalent(&self, lhs: &R, rhs: &R) -> bool {
        lhs <= rhs
    }
}

/// Absolute tolerance for floating-point results.
#[derive(Clone, Copy, Debug)]
pub struct Tolerance {
    pub eps: f64,
}

impl Tolerance {
    pub fn new(eps: f64) -> Self {
        Self { eps }
    }
}

impl Equivalence<f64> for Tolerance {
    fn equivalent(&self, lhs: &f64, rhs: &f64) -> bool {
        (lhs - rhs).abs() <= self.eps
    }
}

impl Equivalence<f32> for Tolerance {
    fn equivalent(&self, lhs: &f32, rhs: &f32) -> bool {
        f64::from((lhs - rhs).abs()) <= self.eps
    }
}

pub struct FromFn<F>(F);

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn(..)")
    }
}

/// Wrap a predicate as an oracle.
pub fn from_fn<R, F>(f: F) -> FromFn<F>
where
    F: Fn(&R, &R) -> bool,
{
    FromFn(f)
}

impl<R, F> Equivalence<R> for FromFn<F>
where
    F: Fn(&R, &R) -> bool,
{
    fn equivalent(&self, lhs: &R, rhs: &R) -> bool {
        (self.0)(lhs, rhs)
    }
}
