// File: crates/rps-chart/src/main.rs
// Summary: Binary entry point; logging setup, parse-then-render run, exit codes.

//! rps-chart - render a max-RPS vs VE-count line chart from a request CSV.
//!
//! Exit codes:
//!   0 - Chart written
//!   1 - Reading/parsing the CSV or rendering the chart failed
//!   2 - Invalid command line

use std::process::ExitCode;

use anyhow::{Context, Result};
use rps_chart::cli::Args;
use rps_chart::{aggregate, render};
use tracing::{debug, error};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let args = Args::parse_args();
    init_logging(&args);
    debug!("Arguments: {:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging from the verbosity flags; `RUST_LOG` overrides them when set.
fn init_logging(args: &Args) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(args.log_level()).into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging unavailable: {e}");
    }
}

fn run(args: &Args) -> Result<()> {
    // Parse fully before touching the output path: no partial PNG on bad input.
    let lines = aggregate::parse(&args.csv)
        .with_context(|| format!("couldn't read and parse requests from {}", args.csv.display()))?;

    render::render(&lines, &args.png, &args.chart_options())
        .with_context(|| format!("couldn't render chart to {}", args.png.display()))?;
    Ok(())
}
