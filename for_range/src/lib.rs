//! for_range — a micro-benchmark for the cost of a plain `for` loop over a range.
//!
//! The measured workload is [`sum::sum_it_up`]: it adds every integer below a
//! bound into a running total, one function call per step. The harness warms
//! the loop up, calls it a fixed number of times under a wall-clock timer,
//! prints the result of one last call and finally reports the elapsed seconds.
//!
//! # Architecture
//!
//! The harness is assembled from small building blocks:
//!
//! - [`Scenario`]: glue that ties everything together — names the run and holds
//!   the measured action, its optional warm-up action and the executor.
//! - [`Executor`]: runs the scenario and owns the clock. The built-in
//!   [`RoundExecutor`] calls the action a fixed number of times on the current
//!   thread.
//! - [`Metric`]: what one call of the action produces.
//! - [`Aggregate`]: a mergeable collector of metrics.
//! - [`Report`]: final numbers derived from a [`executor::Run`].
//! - [`Reporter`]: sends a report somewhere (stdout as text, stdout as JSON).
//!
//! # Example
//!
//! A shortened run of the canonical benchmark:
//!
//! ```rust
//! use for_range::{
//!     Reporter,
//!     config::BenchConfig,
//!     report::{StdoutReporter, TimingReport},
//! };
//!
//! let run = BenchConfig::builder()
//!     .rounds(10)
//!     .warmup_rounds(2)
//!     .build()
//!     .scenario()
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(run.aggregate.calls, 11);
//! assert_eq!(run.aggregate.total(), Some(12_497_500));
//!
//! StdoutReporter.report(TimingReport::from(run)).unwrap();
//! ```
//!
//! # Feature flags
//!
//! - `macros`: the `#[metric]` and `#[aggregate]` attribute macros. (Enabled by default)
//! - `builtins`: the summation metric, aggregate, report and reporters used by the
//!   `for_range` binary. (Enabled by default)

extern crate self as for_range;

/// Metric aggregators
pub mod aggregate;
/// Canonical benchmark parameters
pub mod config;
/// Orchestrators that define how things will actually run
pub mod executor;
/// Single metrics
pub mod metric;
/// Reports and Reporters
pub mod report;
/// Main module of the framework that glues everything together
pub mod scenario;
/// The measured summation loop
pub mod sum;

pub use aggregate::Aggregate;
pub use executor::{Executor, RoundExecutor};
pub use metric::Metric;
pub use report::{Report, Reporter};
pub use scenario::Scenario;

#[cfg(feature = "macros")]
/// Procedural macros to reduce boilerplate
pub mod macros {
    pub use for_range_macros::*;
}
