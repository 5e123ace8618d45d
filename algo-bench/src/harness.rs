//! Harness — differential verification and timing of competing implementations.
//!
//! A `run` goes through three phases:
//!
//!   1. fixed cases     → every implementation on every registered input,
//!                        checked against the expected value (never timed)
//!   2. trials          → one generated input per trial, fed to every
//!                        implementation in registration order; each call is
//!                        timed and checked against implementation 0
//!   3. summary         → each implementation's series is scored by the
//!                        complexity classifier
//!
//! The first correctness violation ends the run with an error carrying the
//! offending input and values. A trial's observations are committed only
//! after every implementation agreed, so all series always have equal length.

use std::fmt;
use std::hint::black_box;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::classifier;
use crate::errors::{HarnessError, Mismatch, MismatchSite, Result};
use crate::generator::{InputGenerator, RandomArray};
use crate::oracle::{Equivalence, Exact};
use crate::report::{CandidateSummary, RunReport};
use crate::types::{Element, FixedCase, Observation, RunConfig};

/// A candidate implementation. It must not keep state that changes its answer.
pub type Implementation<T, R> = Box<dyn Fn(&[T]) -> R>;

struct Candidate<T, R> {
    label: String,
    run: Implementation<T, R>,
    observations: Vec<Observation>,
}

pub struct Harness<T, R> {
    config: RunConfig<T>,
    generator: Box<dyn InputGenerator<T>>,
    oracle: Box<dyn Equivalence<R>>,
    candidates: Vec<Candidate<T, R>>,
    fixed_cases: Vec<FixedCase<T, R>>,
}

impl<T: Element, R: PartialEq + fmt::Debug + 'static> Harness<T, R> {
    /// Harness with the default `RandomArray` generator and `Exact` oracle.
    pub fn new(config: RunConfig<T>) -> Result<Self> {
        let generator = RandomArray::from_config(&config);
        Self::with_parts(config, generator, Exact)
    }
}

impl<T: Element, R: fmt::Debug + 'static> Harness<T, R> {
    pub fn with_parts<G, O>(config: RunConfig<T>, generator: G, oracle: O) -> Result<Self>
    where
        G: InputGenerator<T> + 'static,
        O: Equivalence<R> + 'static,
    {
        config.validate()?;
        Ok(Self {
            config,
            generator: Box::new(generator),
            oracle: Box::new(oracle),
            candidates: Vec::new(),
            fixed_cases: Vec::new(),
        })
    }

    /// Replace the input generator.
    pub fn with_generator<G: InputGenerator<T> + 'static>(mut self, generator: G) -> Self {
        self.generator = Box::new(generator);
        self
    }

    /// Replace the equivalence oracle.
    pub fn with_oracle<O: Equivalence<R> + 'static>(mut self, oracle: O) -> Self {
        self.oracle = Box::new(oracle);
        self
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &RunConfig<T> {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Append an implementation; returns its index. Index 0 is the reference.
    pub fn register_implementation<F>(&mut self, f: F) -> usize
    where
        F: Fn(&[T]) -> R + 'static,
    {
        let label = format!("impl-{}", self.candidates.len());
        self.register_named_implementation(&label, f)
    }

    pub fn register_named_implementation<F>(&mut self, label: &str, f: F) -> usize
    where
        F: Fn(&[T]) -> R + 'static,
    {
        self.candidates.push(Candidate {
            label: label.to_string(),
            run: Box::new(f),
            observations: Vec::new(),
        });
        self.candidates.len() - 1
    }

    pub fn register_fixed_case(&mut self, input: Vec<T>, expected: R) {
        self.fixed_cases.push(FixedCase { input, expected });
    }

    pub fn implementation_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn fixed_case_count(&self) -> usize {
        self.fixed_cases.len()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.candidates.get(index).map(|c| c.label.as_str())
    }

    /// Accumulated series of one implementation, in trial order.
    pub fn observations(&self, index: usize) -> Option<&[Observation]> {
        self.candidates.get(index).map(|c| c.observations.as_slice())
    }

    /// Drop every recorded observation. Registrations are kept.
    pub fn reset_observations(&mut self) {
        for c in &mut self.candidates {
            c.observations.clear();
        }
    }

    // -----------------------------------------------------------------------
    // Run
    // -----------------------------------------------------------------------

    /// Run with the configured trial count.
    pub fn run(&mut self) -> Result<RunReport> {
        self.run_trials(self.config.trials)
    }

    /// Run `trials` randomized trials. Observations accumulate across calls.
    pub fn run_trials(&mut self, trials: usize) -> Result<RunReport> {
        if self.candidates.is_empty() {
            return Err(HarnessError::NoImplementations {
                harness: self.config.name.clone(),
            });
        }

        info!(
            harness = %self.config.name,
            implementations = self.candidates.len(),
            fixed_cases = self.fixed_cases.len(),
            trials,
            "start running"
        );

        self.check_fixed_cases()?;

        let mut pending: Vec<Observation> = Vec::with_capacity(self.candidates.len());
        let mut outputs: Vec<R> = Vec::with_capacity(self.candidates.len());
        for trial in 0..trials {
            let input = self.generator.generate(None);
            debug!(trial, size = input.len(), "trial");
            pending.clear();
            outputs.clear();

            for (index, candidate) in self.candidates.iter().enumerate() {
                let start = Instant::now();
                let output = black_box((candidate.run)(black_box(input.as_slice())));
                let elapsed = start.elapsed();
                outputs.push(output);

                if index > 0 && !self.oracle.equivalent(&outputs[0], &outputs[index]) {
                    let mismatch = self.mismatch(
                        MismatchSite::Trial(trial),
                        &input,
                        &outputs[0],
                        Some(0),
                        index,
                        &outputs[index],
                    );
                    error!(
                        harness = %mismatch.harness,
                        trial,
                        index,
                        input = %mismatch.input,
                        reference = %mismatch.expected,
                        actual = %mismatch.actual,
                        "implementation disagrees with reference"
                    );
                    return Err(HarnessError::CandidateDisagreement(Box::new(mismatch)));
                }

                let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
                pending.push(Observation::new(input.len(), nanos));
            }

            for (candidate, observation) in self.candidates.iter_mut().zip(pending.drain(..)) {
                candidate.observations.push(observation);
            }
        }

        let report = self.summarize(trials);
        info!(harness = %self.config.name, trials, "finished running");
        Ok(report)
    }

    fn check_fixed_cases(&self) -> Result<()> {
        for (case_index, case) in self.fixed_cases.iter().enumerate() {
            for (index, candidate) in self.candidates.iter().enumerate() {
                let actual = (candidate.run)(case.input.as_slice());
                if !self.oracle.equivalent(&actual, &case.expected) {
                    let mismatch = self.mismatch(
                        MismatchSite::FixedCase(case_index),
                        &case.input,
                        &case.expected,
                        None,
                        index,
                        &actual,
                    );
                    error!(
                        harness = %mismatch.harness,
                        case = case_index,
                        index,
                        input = %mismatch.input,
                        expected = %mismatch.expected,
                        actual = %mismatch.actual,
                        "fixed case failed"
                    );
                    return Err(HarnessError::FixedCaseMismatch(Box::new(mismatch)));
                }
            }
        }
        Ok(())
    }

    fn mismatch(
        &self,
        site: MismatchSite,
        input: &[T],
        expected: &R,
        reference: Option<usize>,
        index: usize,
        actual: &R,
    ) -> Mismatch {
        Mismatch {
            harness: self.config.name.clone(),
            site,
            input: format!("{input:?}"),
            expected: format!("{expected:?}"),
            reference,
            index,
            label: self.candidates[index].label.clone(),
            actual: format!("{actual:?}"),
        }
    }

    fn summarize(&self, trials: usize) -> RunReport {
        let candidates = self
            .candidates
            .iter()
            .enumerate()
            .map(|(index, c)| {
                let mean_elapsed_ns = if c.observations.is_empty() {
                    None
                } else {
                    let total: f64 = c.observations.iter().map(|o| o.elapsed_ns as f64).sum();
                    Some(total / c.observations.len() as f64)
                };
                CandidateSummary {
                    index,
                    label: c.label.clone(),
                    observations: c.observations.len(),
                    mean_elapsed_ns,
                    profile: classifier::classify(&c.observations),
                }
            })
            .collect();

        RunReport {
            harness: self.config.name.clone(),
            fixed_cases: self.fixed_cases.len(),
            trials,
            candidates,
        }
    }
}
