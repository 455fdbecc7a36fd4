use for_range::{
    Reporter,
    config::BenchConfig,
    report::{StdoutReporter, TimingReport},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the benchmark output only
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let run = BenchConfig::default().scenario().run()?;
    StdoutReporter.report(TimingReport::from(run))?;
    Ok(())
}
