// File: crates/rps-chart/src/cli.rs
// Summary: Command-line arguments (clap derive) and legacy single-dash flag rewriting.

//! Command-line interface argument parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::render::{ChartOptions, SeriesOrder};

/// Long flags the original tool accepted with a single dash.
const LEGACY_FLAGS: [&str; 2] = ["csv", "png"];

/// Render max-RPS-vs-VE-count lines from a request CSV into a PNG chart.
///
/// The CSV has no header and three columns: request type, VE count, max RPS.
///
/// Examples:
///   rps-chart --csv requests.csv --png output.png
///   rps-chart -csv results.csv -png chart.png --order key
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to CSV with ReqType,N,RPS rows
    #[arg(long, default_value = "requests.csv", value_name = "FILE")]
    pub csv: PathBuf,

    /// Output PNG file
    #[arg(long, default_value = "output.png", value_name = "FILE")]
    pub png: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = rps_chart_core::types::WIDTH, value_parser = clap::value_parser!(i32).range(64..=16384))]
    pub width: i32,

    /// Image height in pixels
    #[arg(long, default_value_t = rps_chart_core::types::HEIGHT, value_parser = clap::value_parser!(i32).range(64..=16384))]
    pub height: i32,

    /// Order of series colors and legend entries
    #[arg(long, value_enum, default_value_t = SeriesOrder::FirstSeen)]
    pub order: SeriesOrder,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse process arguments, accepting `-csv`/`-png` as well as `--csv`/`--png`.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    /// Determine the log level based on verbosity flags.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            width: self.width,
            height: self.height,
            order: self.order,
            ..ChartOptions::default()
        }
    }
}

/// Rewrite `-csv`, `-csv=x`, `-png`, `-png=x` to their `--` forms. Arguments after a
/// bare `--` are left alone.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args.into_iter().map(Into::into) {
        if passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = arg.to_str().and_then(|s| {
            if s == "--" {
                passthrough = true;
                return None;
            }
            let body = s.strip_prefix('-').filter(|b| !b.starts_with('-'))?;
            let name = body.split('=').next().unwrap_or(body);
            LEGACY_FLAGS.contains(&name).then(|| OsString::from(format!("-{s}")))
        });
        out.push(rewritten.unwrap_or(arg));
    }
    out
}
