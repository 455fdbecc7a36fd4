use std::fmt::{Debug, Display};

use serde::{Serialize, de::DeserializeOwned};

/// A single sample produced by one call of a scenario's action.
///
/// `Display` is how the executor prints the sample taken by the final,
/// printed call of a run.
pub trait Metric
where
    Self: Serialize + DeserializeOwned + PartialOrd + PartialEq + Debug + Display + Clone,
{
}

#[cfg(feature = "builtins")]
pub use builtins::*;

#[cfg(feature = "builtins")]
mod builtins {
    use std::fmt;

    use crate::macros::metric;
    use crate::sum::sum_it_up;

    /// The total returned by one call of [`sum_it_up`].
    #[metric]
    #[derive(Copy, Eq)]
    pub struct SumMetric {
        pub total: u128,
    }

    impl SumMetric {
        /// Runs the summation for `iteration` and wraps its result.
        pub fn sample(iteration: u64) -> Self {
            Self::from(sum_it_up(iteration))
        }
    }

    impl From<u128> for SumMetric {
        fn from(total: u128) -> Self {
            Self { total }
        }
    }

    impl fmt::Display for SumMetric {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.total)
        }
    }
}
