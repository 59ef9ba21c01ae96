// File: crates/rps-chart/src/lib.rs
// Summary: Library entry point; re-exports the CSV aggregator, chart rendering and CLI types.

//! rps-chart: plots max throughput (RPS) against VE count for every request type in a CSV.
//!
//! [`aggregate`] groups CSV rows into per-request-type lines, [`render`] draws them with
//! `rps-chart-core` and writes a PNG, [`cli`] holds the command-line surface.

pub mod aggregate;
pub mod cli;
pub mod render;

pub use aggregate::{parse, parse_reader, Line, ParseError, SeriesCollection};
pub use render::{render, ChartOptions, SeriesOrder};
