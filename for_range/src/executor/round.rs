use std::{hint::black_box, io::Write, time::Instant};

use typed_builder::TypedBuilder;

use super::{Executor, Run};
use crate::{
    aggregate::Aggregate,
    config::{ROUNDS, WARMUP_ROUNDS},
    scenario::Scenario,
};

/// Executor that calls the action a fixed number of times on the current thread.
///
/// - `warmup_rounds` calls of the scenario's warm-up action happen before the
///   clock starts and are not aggregated. Ignored when the scenario has no
///   warm-up action.
/// - `rounds` timed calls are aggregated, followed by one more timed call
///   whose metric is printed. A run therefore aggregates `rounds + 1` samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct RoundExecutor {
    #[builder(default = ROUNDS)]
    pub rounds: u64,
    #[builder(default = WARMUP_ROUNDS)]
    pub warmup_rounds: u64,
}

impl<A, F> Executor<A, F> for RoundExecutor
where
    A: Aggregate,
    F: Fn() -> A::Metric,
{
    fn exec(
        &self,
        scenario: &Scenario<A, Self, F>,
        out: &mut dyn Write,
    ) -> Result<Run<A>, Box<dyn std::error::Error>> {
        if let Some(warmup) = &scenario.warmup {
            tracing::info!(rounds = self.warmup_rounds, "Warming up {}...", scenario.name);
            for _ in 0..self.warmup_rounds {
                black_box(warmup());
            }
        }

        let action = &scenario.action;
        let mut agg = A::new();

        tracing::info!(rounds = self.rounds, "Running {}...", scenario.name);
        writeln!(out, "Start timing...")?;
        let start = Instant::now();

        for _ in 0..self.rounds {
            let metric = action();
            agg.consume(&metric);
        }
        let last = action();
        writeln!(out, "{last}")?;
        agg.consume(&last);

        let elapsed = start.elapsed();
        tracing::info!(?elapsed, "Done running scenario: {}!", scenario.name);

        Ok(Run {
            name: scenario.name.clone(),
            aggregate: agg,
            elapsed,
        })
    }
}
