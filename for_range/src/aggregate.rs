use crate::Metric;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

/// The `Aggregate` trait defines how raw [`Metric`] values are collected and combined
/// into an intermediate, mergeable representation.
///
/// Aggregates keep counters and raw values only. Derived numbers such as the
/// elapsed time per call or a pass/fail verdict belong in a [`Report`](crate::Report),
/// which is built from the [`Run`](crate::executor::Run) holding the aggregate.
///
/// # Example
/// ```rust
/// use std::fmt;
///
/// use for_range::{Aggregate, macros::*};
///
/// #[metric]
/// struct Ticks(u64);
///
/// impl fmt::Display for Ticks {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
///
/// #[aggregate]
/// struct TickCount {
///     samples: u64,
///     ticks: u128,
/// }
///
/// impl Aggregate for TickCount {
///     type Metric = Ticks;
///
///     fn new() -> Self {
///         Self { samples: 0, ticks: 0 }
///     }
///
///     fn consume(&mut self, metric: &Self::Metric) {
///         self.samples += 1;
///         self.ticks += u128::from(metric.0);
///     }
///
///     fn merge(&mut self, other: Self) {
///         self.samples += other.samples;
///         self.ticks += other.ticks;
///     }
/// }
/// ```
///
/// # Implementor notes
/// - `consume` runs inside the timed loop. Keep it to a handful of integer
///   operations and never allocate there.
/// - `merge` must not depend on which side already saw samples.
pub trait Aggregate
where
    Self: Serialize + DeserializeOwned + PartialOrd + PartialEq + Debug + Clone,
{
    /// The metric type this aggregate summarizes.
    type Metric: Metric;

    /// Create a new, empty instance of the aggregate.
    fn new() -> Self;

    /// Aggregate multiple metrics into the current instance.
    ///
    /// This default implementation calls [`consume`](Aggregate::consume) for each metric.
    fn aggregate(&mut self, metrics: &[Self::Metric]) {
        metrics.iter().for_each(|m| self.consume(m));
    }

    /// Incorporate a single metric into the aggregate.
    fn consume(&mut self, metric: &Self::Metric);

    /// Combine two different aggregates into one.
    fn merge(&mut self, other: Self);
}

#[cfg(feature = "builtins")]
pub use builtins::*;

#[cfg(feature = "builtins")]
mod builtins {
    use crate::metric::SumMetric;

    use super::*;
    use crate::macros::aggregate;

    /// Counts calls of the summation and checks that every call agreed.
    ///
    /// - **calls:** number of samples consumed.
    /// - **min / max:** smallest and largest total seen, `None` until a sample
    ///   arrives.
    ///
    /// All calls agreed exactly when `min == max`. Both bounds merge with
    /// `min`/`max`, so merging gives the same result in any order.
    #[aggregate]
    #[derive(Default)]
    pub struct SumAggregate {
        pub calls: u64,
        pub min: Option<u128>,
        pub max: Option<u128>,
    }

    impl SumAggregate {
        pub fn is_consistent(&self) -> bool {
            self.min == self.max
        }

        /// The total every call returned, `None` if there were no calls or
        /// the calls disagreed.
        pub fn total(&self) -> Option<u128> {
            if self.is_consistent() { self.min } else { None }
        }
    }

    fn lower(a: Option<u128>, b: Option<u128>) -> Option<u128> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn upper(a: Option<u128>, b: Option<u128>) -> Option<u128> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }

    impl Aggregate for SumAggregate {
        type Metric = SumMetric;

        fn new() -> Self {
            SumAggregate::default()
        }

        fn consume(&mut self, metric: &Self::Metric) {
            self.calls += 1;
            self.min = lower(self.min, Some(metric.total));
            self.max = upper(self.max, Some(metric.total));
        }

        fn merge(&mut self, other: Self) {
            self.calls += other.calls;
            self.min = lower(self.min, other.min);
            self.max = upper(self.max, other.max);
        }
    }
}

#[cfg(all(test, feature = "builtins"))]
mod tests {
    use super::*;
    use crate::metric::SumMetric;

    fn aggregate_of(totals: &[u128]) -> SumAggregate {
        let metrics: Vec<SumMetric> = totals.iter().copied().map(SumMetric::from).collect();
        let mut agg = SumAggregate::new();
        agg.aggregate(&metrics);
        agg
    }

    fn consumed_in_sequence(first: &[u128], second: &[u128]) -> SumAggregate {
        aggregate_of(&[first, second].concat())
    }

    fn merged(first: &[u128], second: &[u128]) -> SumAggregate {
        let mut agg = aggregate_of(first);
        agg.merge(aggregate_of(second));
        agg
    }

    #[test]
    fn empty_aggregate_has_no_total() {
        let agg = SumAggregate::new();
        assert_eq!(agg.calls, 0);
        assert_eq!(agg.total(), None);
        assert!(agg.is_consistent());
    }

    #[test]
    fn consume_counts_every_call() {
        let agg = aggregate_of(&[45, 45, 45]);
        assert_eq!(agg.calls, 3);
        assert_eq!(agg.total(), Some(45));
        assert!(agg.is_consistent());
    }

    #[test]
    fn diverging_sample_makes_it_inconsistent() {
        let agg = aggregate_of(&[45, 46, 45]);
        assert_eq!(agg.calls, 3);
        assert_eq!(agg.min, Some(45));
        assert_eq!(agg.max, Some(46));
        assert_eq!(agg.total(), None);
        assert!(!agg.is_consistent());
    }

    #[test]
    fn merge_adds_calls() {
        let left = merged(&[45, 45], &[45]);
        assert_eq!(left.calls, 3);
        assert_eq!(left.total(), Some(45));
    }

    #[test]
    fn merge_into_empty_takes_the_other_side() {
        assert_eq!(merged(&[], &[45, 45]), aggregate_of(&[45, 45]));
        assert_eq!(merged(&[45, 45], &[]), aggregate_of(&[45, 45]));
    }

    #[test]
    fn merge_of_disagreeing_aggregates_is_inconsistent() {
        let agg = merged(&[45], &[0, 0]);
        assert_eq!(agg.calls, 3);
        assert!(!agg.is_consistent());
    }

    #[test]
    fn merge_equals_sequential_consumption_in_both_orders() {
        let cases: [(&[u128], &[u128]); 5] = [
            (&[45], &[0, 45]),
            (&[45], &[0, 0]),
            (&[45, 45], &[45]),
            (&[1, 7], &[3]),
            (&[], &[9, 2]),
        ];
        for (a, b) in cases {
            assert_eq!(merged(a, b), consumed_in_sequence(a, b), "{a:?} <- {b:?}");
            assert_eq!(merged(b, a), consumed_in_sequence(b, a), "{b:?} <- {a:?}");
            assert_eq!(merged(a, b), merged(b, a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn merge_is_associative() {
        let (a, b, c) = (aggregate_of(&[3]), aggregate_of(&[5, 3]), aggregate_of(&[1]));

        let mut left = a.clone();
        left.merge(b.clone());
        left.merge(c.clone());

        let mut right = b;
        right.merge(c);
        let mut outer = a;
        outer.merge(right);

        assert_eq!(left, outer);
    }

    #[test]
    fn deserialized_aggregate_merges_without_panicking() {
        let odd: SumAggregate = serde_json::from_str(r#"{"calls":0,"min":5,"max":2}"#).unwrap();
        let mut agg = aggregate_of(&[3]);
        agg.merge(odd);
        assert_eq!(agg.calls, 1);
        assert_eq!(agg.min, Some(3));
        assert_eq!(agg.max, Some(3));
    }
}
