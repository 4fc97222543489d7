//! Army Points - prices an army list against a points document.

use army_points::{price_files, render, OutputFormat, Resolver, DEFAULT_POINTS_FILE};
use clap::Parser;
use std::path::PathBuf;

/// Compute the total point cost of an army list
#[derive(Parser, Debug)]
#[command(name = "army_points")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the army list (first line: faction, then one unit per line)
    list: PathBuf,

    /// Path to the points document
    #[arg(long, default_value = DEFAULT_POINTS_FILE)]
    point_cost_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Minimum similarity (0 to 1) for a name to count as a match
    #[arg(long, default_value_t = 0.0)]
    min_similarity: f64,
}

fn run(args: &Args) -> army_points::Result<String> {
    let resolver = Resolver::new(args.min_similarity)?;
    let report = price_files(&args.point_cost_file, &args.list, &resolver)?;
    log::info!(
        "{} entries for {} totalling {} pts",
        report.entries.len(),
        report.faction,
        report.total
    );
    render(&report, args.format)
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=army_points=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("Arguments: {args:?}");

    match run(&args) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            log::error!("{e}");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
