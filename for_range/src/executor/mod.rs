//! Executor — how a `Scenario` is actually run and timed
//!
//! The `Executor` trait is the hook that executes a `Scenario` and returns a
//! [`Run`]: the merged aggregate plus the wall-clock time the timed section
//! took. Executors are the only place where performance matters; anything
//! they do between starting and stopping the clock ends up in the result.
//!
//! The built-in `RoundExecutor` is strictly sequential:
//!
//! 1. Call the scenario's warm-up action `warmup_rounds` times, untimed.
//! 2. Print `Start timing...` and start the clock.
//! 3. Call the action `rounds` times, consuming every metric into the aggregate.
//! 4. Call the action once more and print the metric it returns.
//! 5. Stop the clock.
//!
//! Step 4 is inside the timed section, so the printed result is part of what
//! gets measured.
//!
//! # Common pitfalls
//! - **Keep setup out of the action.** Anything allocated per call is timed.
//! - **Feed inputs through `std::hint::black_box`.** A pure action with a
//!   constant input can be hoisted out of the loop by the optimiser, leaving
//!   nothing to measure.
pub mod round;
pub use round::RoundExecutor;

use std::{io::Write, time::Duration};

use crate::{aggregate::Aggregate, scenario::Scenario};

/// Raw outcome of executing a scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<A: Aggregate> {
    /// Name of the scenario that produced this run.
    pub name: String,
    pub aggregate: A,
    /// Wall-clock time of the timed section.
    pub elapsed: Duration,
}

pub trait Executor<A, F>
where
    Self: Sized,
    A: Aggregate,
    F: Fn() -> A::Metric,
{
    /// Execute the scenario, writing its console output to `out`.
    fn exec(
        &self,
        scenario: &Scenario<A, Self, F>,
        out: &mut dyn Write,
    ) -> Result<Run<A>, Box<dyn std::error::Error>>;
}
