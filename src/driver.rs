//! Repeated trials over both strategies and the final report.

use std::fmt;

use crate::error::{BenchError, Result};
use crate::stats::StatAccumulator;
use crate::strategy::{Exclusive, OwnershipStrategy, Shared};
use crate::trial::{run_trial, StrategyStats};

// ============================================================================
// Configuration
// ============================================================================

/// Variables allocated per trial.
pub const OBJECT_COUNT: usize = 1_000;

/// Trials per strategy.
pub const RUN_COUNT: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub object_count: usize,
    pub run_count: usize,
}

impl BenchConfig {
    pub fn with_object_count(mut self, object_count: usize) -> Self {
        self.object_count = object_count;
        self
    }

    pub fn with_run_count(mut self, run_count: usize) -> Self {
        self.run_count = run_count;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.run_count == 0 {
            return Err(BenchError::InvalidConfig(
                "run_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            object_count: OBJECT_COUNT,
            run_count: RUN_COUNT,
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// Mean and population variance of one strategy/phase pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSummary {
    pub label: String,
    pub mean: f64,
    pub variance: f64,
}

impl PhaseSummary {
    fn from_samples(label: String, samples: &StatAccumulator) -> Result<Self> {
        let summary = samples.summary()?;
        Ok(Self {
            label,
            mean: summary.mean,
            variance: summary.variance,
        })
    }
}

impl fmt::Display for PhaseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - avg: {}, cov: {}", self.label, self.mean, self.variance)
    }
}

/// Six summaries: populate, compute then release, each for Exclusive then Shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub phases: Vec<PhaseSummary>,
}

impl Report {
    fn build(exclusive: &StrategyStats, shared: &StrategyStats) -> Result<Self> {
        let phases = vec![
            summarize::<Exclusive>("pointers", &exclusive.populate)?,
            summarize::<Shared>("pointers", &shared.populate)?,
            summarize::<Exclusive>("use", &exclusive.compute)?,
            summarize::<Shared>("use", &shared.compute)?,
            summarize::<Exclusive>("delete", &exclusive.release)?,
            summarize::<Shared>("delete", &shared.release)?,
        ];
        Ok(Self { phases })
    }
}

fn summarize<S: OwnershipStrategy>(phase: &str, samples: &StatAccumulator) -> Result<PhaseSummary> {
    PhaseSummary::from_samples(format!("{} {}", S::LABEL, phase), samples)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for phase in &self.phases {
            writeln!(f, "{phase}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Runs `config.run_count` trials of each strategy, alternating between
/// them so both see the same system noise.
///
/// The first failing trial aborts the run.
pub fn run(config: &BenchConfig) -> Result<Report> {
    config.validate()?;

    let mut exclusive = StrategyStats::with_capacity(config.run_count);
    let mut shared = StrategyStats::with_capacity(config.run_count);

    for _ in 0..config.run_count {
        run_trial::<Exclusive>(config.object_count, &mut exclusive)?;
        run_trial::<Shared>(config.object_count, &mut shared)?;
    }

    Report::build(&exclusive, &shared)
}
