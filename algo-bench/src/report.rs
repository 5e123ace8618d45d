//! Run report — the per-implementation summary table.

use std::fmt;

use serde::Serialize;

use crate::classifier::{ComplexityProfile, GrowthShape};

const BANNER: &str = ">>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>";
const SIGNIFICANT_DIGITS: usize = 4;

#[derive(Clone, Debug, Serialize)]
pub struct CandidateSummary {
    pub index: usize,
    pub label: String,
    /// Length of the accumulated series, across every `run` so far.
    pub observations: usize,
    pub mean_elapsed_ns: Option<f64>,
    pub profile: ComplexityProfile,
}

#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub harness: String,
    pub fixed_cases: usize,
    /// Randomized trials executed by this `run` call.
    pub trials: usize,
    pub candidates: Vec<CandidateSummary>,
}

impl RunReport {
    pub fn candidate(&self, index: usize) -> Option<&CandidateSummary> {
        self.candidates.get(index)
    }

    pub fn start_banner(name: &str) -> String {
        format!("Start running {name}...")
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BANNER}")?;
        write!(f, "{:>2}|", " ")?;
        for shape in GrowthShape::ALL {
            write!(f, "{:>6}|", shape.label())?;
        }
        writeln!(f)?;

        for c in &self.candidates {
            write!(f, "{:>2}|", c.index)?;
            for shape in GrowthShape::ALL {
                let cell = match c.profile.score(shape) {
                    Some(score) => format!("{}%", format_significant(score, SIGNIFICANT_DIGITS)),
                    None => "n/a".to_string(),
                };
                write!(f, "{cell:>6}|")?;
            }
            writeln!(f)?;
        }

        write!(f, "Finished running {}...", self.harness)
    }
}

/// Format with `digits` significant digits, trimming trailing zeros.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits as i32 - 1 - magnitude).max(0) as usize;
    let mut text = format!("{value:.decimals$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}
