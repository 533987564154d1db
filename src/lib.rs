//! Raw owning pointers vs `Rc` benchmark.
//!
//! Populates a keyed table of polymorphic variables under two ownership
//! disciplines, multiplies their domain sizes, releases the table, and
//! reports mean and population variance of each phase over many trials.

pub mod driver;
pub mod error;
pub mod stats;
pub mod strategy;
pub mod table;
pub mod timer;
pub mod trial;
pub mod variable;

pub use driver::{run, BenchConfig, PhaseSummary, Report, OBJECT_COUNT, RUN_COUNT};
pub use error::{BenchError, Result};
pub use stats::{StatAccumulator, Summary};
pub use strategy::{Exclusive, ExclusiveTable, OwnershipStrategy, Shared, SharedTable};
pub use table::KeyedTable;
pub use timer::Timer;
pub use trial::{run_trial, StrategyStats};
pub use variable::{DiscreteVariable, LabelizedVariable};
