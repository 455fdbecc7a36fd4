use std::{
    io::{self, Write},
    marker::PhantomData,
};

use typed_builder::TypedBuilder;

use crate::{
    aggregate::Aggregate,
    executor::{Executor, Run},
};

/// What gets measured and how.
///
/// `action` is the measured call. `warmup`, when present, is called by the
/// executor before the clock starts so the measured code is already hot; its
/// samples are thrown away.
#[derive(TypedBuilder)]
pub struct Scenario<A, E, F>
where
    A: Aggregate,
    E: Executor<A, F>,
    F: Fn() -> A::Metric,
{
    #[builder(setter(into))]
    pub name: String,
    pub action: F,
    #[builder(default, setter(strip_option))]
    pub warmup: Option<Box<dyn Fn() -> A::Metric>>,
    pub executor: E,
    #[builder(default, setter(skip))]
    aggregator: PhantomData<A>,
}

impl<A, E, F> Scenario<A, E, F>
where
    A: Aggregate,
    E: Executor<A, F>,
    F: Fn() -> A::Metric,
{
    /// Runs the scenario with its console output going to stdout.
    pub fn run(&self) -> Result<Run<A>, Box<dyn std::error::Error>> {
        let mut out = io::stdout().lock();
        self.run_with(&mut out)
    }

    pub fn run_with(&self, out: &mut dyn Write) -> Result<Run<A>, Box<dyn std::error::Error>> {
        self.executor.exec(self, out)
    }
}
