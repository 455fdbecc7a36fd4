use for_range::{
    Reporter,
    config::BenchConfig,
    report::{JsonReporter, TimingReport},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // A tenth of the canonical run, reported as JSON for scripts to pick up
    let config = BenchConfig::builder().name("for_range_json").rounds(5_000).build();
    let run = config.scenario().run()?;

    JsonReporter.report(TimingReport::from(run))?;
    Ok(())
}
