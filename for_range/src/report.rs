use serde::{Serialize, de::DeserializeOwned};
use std::{fmt::Debug, time::Duration};

use crate::{Aggregate, executor::Run};

/// Final statistics derived from a [`Run`].
pub trait Report<A>
where
    Self: Debug + From<Run<A>> + Serialize + DeserializeOwned,
    A: Aggregate,
{
}

/// Sends a [`Report`] somewhere.
pub trait Reporter<A: Aggregate, R: Report<A>> {
    fn report(&self, report: R) -> Result<(), Box<dyn std::error::Error>>;
}

#[cfg(feature = "builtins")]
pub use builtins::*;

#[cfg(feature = "builtins")]
mod builtins {
    use std::fmt;

    use serde::Deserialize;

    use crate::aggregate::SumAggregate;

    use super::*;

    #[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
    pub struct TimingReport {
        pub name: String,
        pub calls: u64,
        pub total: Option<u128>,
        pub consistent: bool,
        pub elapsed: Duration,
        pub per_call: Duration,
    }

    impl From<Run<SumAggregate>> for TimingReport {
        fn from(run: Run<SumAggregate>) -> Self {
            let Run {
                name,
                aggregate,
                elapsed,
            } = run;
            let per_call = match elapsed.as_nanos().checked_div(u128::from(aggregate.calls)) {
                Some(nanos) => Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX)),
                None => Duration::ZERO,
            };

            Self {
                name,
                calls: aggregate.calls,
                total: aggregate.total(),
                consistent: aggregate.is_consistent(),
                elapsed,
                per_call,
            }
        }
    }
    impl Report<SumAggregate> for TimingReport {}

    /// `<name>: <seconds>` with exactly three decimals.
    impl fmt::Display for TimingReport {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}: {:.3}", self.name, self.elapsed.as_secs_f64())
        }
    }

    fn warn_if_inconsistent(report: &TimingReport) {
        if !report.consistent {
            tracing::warn!(name = %report.name, "Calls returned different totals");
        }
    }

    /// Prints the elapsed time line.
    pub struct StdoutReporter;
    impl Reporter<SumAggregate, TimingReport> for StdoutReporter {
        fn report(&self, report: TimingReport) -> Result<(), Box<dyn std::error::Error>> {
            warn_if_inconsistent(&report);
            println!("{report}");
            Ok(())
        }
    }

    /// Prints the whole report as one line of JSON.
    pub struct JsonReporter;
    impl Reporter<SumAggregate, TimingReport> for JsonReporter {
        fn report(&self, report: TimingReport) -> Result<(), Box<dyn std::error::Error>> {
            warn_if_inconsistent(&report);
            let value = serde_json::to_string(&report)?;
            println!("{value}");
            Ok(())
        }
    }
}
