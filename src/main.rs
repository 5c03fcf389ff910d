mod chart;
mod color;
mod config;
mod data;
mod pipeline;
mod report;

use std::path::Path;

use anyhow::Result;
use log::debug;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let dataset = data::loader::fetch_dataset(config::DATA_URL)?;
    let output = pipeline::run(&dataset, Path::new("."))?;
    debug!(
        "Years {:?}: {} charts, report at {}",
        output.selection.years(),
        output.charts.len(),
        output.report.display()
    );

    println!("Analysis complete! Open {} to view results", config::REPORT_FILE);
    Ok(())
}
