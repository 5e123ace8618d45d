//! Harness error types.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),
    #[error("NoImplementations: harness '{harness}' has nothing registered to run")]
    NoImplementations { harness: String },
    #[error("FixedCaseMismatch: {0}")]
    FixedCaseMismatch(Box<Mismatch>),
    #[error("CandidateDisagreement: {0}")]
    CandidateDisagreement(Box<Mismatch>),
}

impl HarnessError {
    /// Diagnostic payload of a correctness violation, if this is one.
    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Self::FixedCaseMismatch(m) | Self::CandidateDisagreement(m) => Some(m),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;

// ---------------------------------------------------------------------------
// Mismatch — everything needed to reproduce a correctness violation
// ---------------------------------------------------------------------------

/// Where a mismatch was detected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MismatchSite {
    /// Fixed case at this registration index.
    FixedCase(usize),
    /// Randomized trial at this index within the failing `run` call.
    Trial(usize),
}

/// Rendered diagnostic context of a failed comparison.
///
/// Values are captured with their `Debug` form so the error stays
/// independent of the harness' element and result types.
#[derive(Clone, Debug)]
pub struct Mismatch {
    pub harness: String,
    pub site: MismatchSite,
    pub input: String,
    /// Expected value of the fixed case, or the reference implementation's output.
    pub expected: String,
    /// `None` for fixed cases, otherwise the reference implementation index.
    pub reference: Option<usize>,
    pub index: usize,
    pub label: String,
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Incorrect solution: {}", self.input)?;
        match self.reference {
            Some(reference) => writeln!(f, "Index {reference}: {}", self.expected)?,
            None => writeln!(f, "Expect: {}", self.expected)?,
        }
        write!(f, "Index {} ({}): {}", self.index, self.label, self.actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(reference: Option<usize>) -> Mismatch {
        Mismatch {
            harness: "demo".into(),
            site: MismatchSite::FixedCase(0),
            input: "[1, 0, 2]".into(),
            expected: "3".into(),
            reference,
            index: 1,
            label: "fast".into(),
            actual: "4".into(),
        }
    }

    #[test]
    fn fixed_case_block_names_expected_value() {
        let text = sample(None).to_string();
        assert_eq!(text, "Incorrect solution: [1, 0, 2]\nExpect: 3\nIndex 1 (fast): 4");
    }

    #[test]
    fn trial_block_names_reference_index() {
        let text = sample(Some(0)).to_string();
        assert!(text.contains("Index 0: 3"), "got: {text}");
        assert!(text.contains("Index 1 (fast): 4"), "got: {text}");
    }

    #[test]
    fn mismatch_accessor_only_for_violations() {
        let err = HarnessError::CandidateDisagreement(Box::new(sample(Some(0))));
        assert_eq!(err.mismatch().map(|m| m.index), Some(1));
        let err = HarnessError::InvalidConfig("bad".into());
        assert!(err.mismatch().is_none());
    }
}
