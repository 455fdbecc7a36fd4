//! Canonical parameters of the benchmark.
//!
//! The binary runs [`BenchConfig::default`]; the builder exists so tests and
//! library users can shrink the run without touching the harness.

use typed_builder::TypedBuilder;

/// Name printed in front of the elapsed time.
pub const NAME: &str = "for_range";
/// Bound handed to every timed call.
pub const ITERATION: u64 = 5_000;
/// Timed calls made before the final, printed one.
pub const ROUNDS: u64 = 50_000;
/// Untimed calls made before the timer starts.
pub const WARMUP_ROUNDS: u64 = 1_000;
/// Bound handed to every warm-up call.
pub const WARMUP_ITERATION: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct BenchConfig {
    #[builder(default = NAME.to_string(), setter(into))]
    pub name: String,
    #[builder(default = ITERATION)]
    pub iteration: u64,
    #[builder(default = ROUNDS)]
    pub rounds: u64,
    #[builder(default = WARMUP_ROUNDS)]
    pub warmup_rounds: u64,
    #[builder(default = WARMUP_ITERATION)]
    pub warmup_iteration: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(feature = "builtins")]
mod builtins {
    use std::hint::black_box;

    use super::BenchConfig;
    use crate::{
        aggregate::SumAggregate, executor::RoundExecutor, metric::SumMetric, scenario::Scenario,
    };

    impl BenchConfig {
        /// The executor running `rounds` timed calls after `warmup_rounds` warm-up calls.
        pub fn executor(&self) -> RoundExecutor {
            RoundExecutor::builder()
                .rounds(self.rounds)
                .warmup_rounds(self.warmup_rounds)
                .build()
        }

        /// Wires the summation into a ready-to-run scenario.
        pub fn scenario(
            &self,
        ) -> Scenario<SumAggregate, RoundExecutor, impl Fn() -> SumMetric + use<>> {
            let iteration = self.iteration;
            let warmup_iteration = self.warmup_iteration;

            Scenario::<SumAggregate, _, _>::builder()
                .name(self.name.clone())
                .action(move || SumMetric::sample(black_box(iteration)))
                .warmup(Box::new(move || SumMetric::sample(black_box(warmup_iteration))))
                .executor(self.executor())
                .build()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_canonical_run() {
        let config = BenchConfig::default();
        assert_eq!(config.name, "for_range");
        assert_eq!(config.iteration, 5_000);
        assert_eq!(config.rounds, 50_000);
        assert_eq!(config.warmup_rounds, 1_000);
        assert_eq!(config.warmup_iteration, 10);
    }

    #[test]
    fn builder_overrides_single_fields() {
        let config = BenchConfig::builder().rounds(3).name("short").build();
        assert_eq!(config.rounds, 3);
        assert_eq!(config.name, "short");
        assert_eq!(config.iteration, ITERATION);
    }

    #[cfg(feature = "builtins")]
    #[test]
    fn executor_carries_round_counts() {
        let executor = BenchConfig::builder().rounds(7).warmup_rounds(2).build().executor();
        assert_eq!(executor.rounds, 7);
        assert_eq!(executor.warmup_rounds, 2);
    }

    #[cfg(feature = "builtins")]
    #[test]
    fn scenario_prints_the_canonical_total() {
        let scenario = BenchConfig::builder().rounds(5).warmup_rounds(3).build().scenario();

        let mut out = Vec::new();
        let run = scenario.run_with(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Start timing...\n12497500\n");
        assert_eq!(run.name, NAME);
        assert_eq!(run.aggregate.calls, 6);
        assert!(run.aggregate.is_consistent());
    }
}
