//! Complexity classifier — R² of timing data against canonical growth shapes.
//!
//! For each shape f ∈ {log n, n, n·log n, n²} the observation series is
//! turned into (x, y) = (f(size), elapsed_ns) and scored with the squared
//! Pearson correlation:
//!
//!   r = (E[XY] − E[X]E[Y]) / sqrt((E[X²] − E[X]²)(E[Y²] − E[Y]²))
//!   score = 100 · r²
//!
//! Every shape is scored independently; picking a winner is left to the
//! reader of the report (`ComplexityProfile::best_fit` is only a hint).

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::Observation;

/// Variance below this fraction of E[X²] is treated as zero.
const RELATIVE_VARIANCE_FLOOR: f64 = 1e-12;

// ---------------------------------------------------------------------------
// GrowthShape
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GrowthShape {
    Log,
    Linear,
    Linearithmic,
    Quadratic,
}

impl GrowthShape {
    /// Report column order.
    pub const ALL: [GrowthShape; 4] = [
        GrowthShape::Log,
        GrowthShape::Linear,
        GrowthShape::Linearithmic,
        GrowthShape::Quadratic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Log => "logN",
            Self::Linear => "N",
            Self::Linearithmic => "NlogN",
            Self::Quadratic => "N*N",
        }
    }

    pub fn transform(self, n: f64) -> f64 {
        match self {
            Self::Log => n.ln(),
            Self::Linear => n,
            Self::Linearithmic => n * n.ln(),
            Self::Quadratic => n * n,
        }
    }
}

// ---------------------------------------------------------------------------
// ComplexityProfile
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeScore {
    pub shape: GrowthShape,
    /// Percentage in [0, 100]; `None` when the series is degenerate.
    pub score: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplexityProfile {
    pub scores: Vec<ShapeScore>,
}

impl ComplexityProfile {
    pub fn score(&self, shape: GrowthShape) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.shape == shape)
            .and_then(|s| s.score)
    }

    /// Shape with the highest available score. Ties keep the simpler shape.
    pub fn best_fit(&self) -> Option<GrowthShape> {
        let mut best: Option<(GrowthShape, f64)> = None;
        for s in &self.scores {
            if let Some(score) = s.score {
                if best.map_or(true, |(_, b)| score > b) {
                    best = Some((s.shape, score));
                }
            }
        }
        best.map(|(shape, _)| shape)
    }

    pub fn is_available(&self) -> bool {
        self.scores.iter().any(|s| s.score.is_some())
    }
}

// ---------------------------------------------------------------------------
// classify() / r_squared()
// ---------------------------------------------------------------------------

/// Score one implementation's series against all four shapes.
pub fn classify(observations: &[Observation]) -> ComplexityProfile {
    let scores: Vec<ShapeScore> = GrowthShape::ALL
        .iter()
        .map(|&shape| ShapeScore { shape, score: r_squared(observations, shape) })
        .collect();

    if observations.len() >= 2 {
        for s in scores.iter().filter(|s| s.score.is_none()) {
            warn!(
                shape = s.shape.label(),
                observations = observations.len(),
                "degenerate series, score unavailable"
            );
        }
    }

    ComplexityProfile { scores }
}

/// R² (as a percentage) of elapsed time against `shape(size)`.
///
/// Returns `None` for fewer than two observations, or when either the
/// transformed sizes or the times have no variance.
pub fn r_squared(observations: &[Observation], shape: GrowthShape) -> Option<f64> {
    if observations.len() < 2 {
        return None;
    }

    let x = |o: &Observation| shape.transform(o.size as f64);
    let y = |o: &Observation| o.elapsed_ns as f64;

    let mean_x = average(observations, |o| x(o));
    let mean_y = average(observations, |o| y(o));
    let mean_xsq = average(observations, |o| x(o) * x(o));
    let mean_ysq = average(observations, |o| y(o) * y(o));
    let mean_xy = average(observations, |o| x(o) * y(o));

    let var_x = mean_xsq - mean_x * mean_x;
    let var_y = mean_ysq - mean_y * mean_y;
    if !has_variance(var_x, mean_xsq) || !has_variance(var_y, mean_ysq) {
        return None;
    }

    let r = (mean_xy - mean_x * mean_y) / (var_x * var_y).sqrt();
    let score = r * r * 100.0;
    score.is_finite().then(|| score.clamp(0.0, 100.0))
}

fn average<F>(observations: &[Observation], op: F) -> f64
where
    F: Fn(&Observation) -> f64,
{
    let sum: f64 = observations.iter().map(op).sum();
    sum / observations.len() as f64
}

fn has_variance(var: f64, mean_sq: f64) -> bool {
    var.is_finite() && var > RELATIVE_VARIANCE_FLOOR * mean_sq.abs()
}
