//! One populate / compute / release cycle for a strategy.

use std::hint::black_box;

use crate::error::Result;
use crate::stats::StatAccumulator;
use crate::strategy::OwnershipStrategy;
use crate::timer::Timer;

/// Per-phase samples of one strategy.
#[derive(Debug, Default, Clone)]
pub struct StrategyStats {
    pub populate: StatAccumulator,
    pub compute: StatAccumulator,
    pub release: StatAccumulator,
}

impl StrategyStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(runs: usize) -> Self {
        Self {
            populate: StatAccumulator::with_capacity(runs),
            compute: StatAccumulator::with_capacity(runs),
            release: StatAccumulator::with_capacity(runs),
        }
    }

    /// Number of completed trials.
    pub fn trials(&self) -> usize {
        self.release.len()
    }
}

struct PhaseTimes {
    populate: f64,
    compute: f64,
    size: i64,
}

/// Runs one trial over `n` variables and records a sample per phase.
///
/// The release sample is the whole trial minus the populate and compute
/// samples, so it also covers drops that happen outside `release` itself.
/// It is recorded as is, even when timer noise makes it negative.
pub fn run_trial<S: OwnershipStrategy>(n: usize, stats: &mut StrategyStats) -> Result<i64> {
    let mut trial = Timer::new();
    trial.reset();
    let times = run_phases::<S>(n, stats)?;
    let total = trial.elapsed();
    stats.release.record(total - times.populate - times.compute);
    Ok(times.size)
}

fn run_phases<S: OwnershipStrategy>(n: usize, stats: &mut StrategyStats) -> Result<PhaseTimes> {
    let mut timer = Timer::new();

    timer.reset();
    let table = S::populate(n)?;
    let populate = timer.elapsed();
    stats.populate.record(populate);

    timer.reset();
    let size = black_box(S::aggregate(black_box(&table)));
    let compute = timer.elapsed();
    stats.compute.record(compute);

    S::release(table);
    Ok(PhaseTimes {
        populate,
        compute,
        size,
    })
}
