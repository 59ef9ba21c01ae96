// File: crates/rps-chart/src/render.rs
// Summary: Turns a SeriesCollection into a throughput chart and writes it as one PNG.

use std::path::Path;

use rps_chart_core::types::DEFAULT_STROKE_WIDTH;
use rps_chart_core::{Axis, Chart, RenderError, RenderOptions, Series, SeriesStyle, Theme};
use tracing::info;

use crate::aggregate::SeriesCollection;

pub const X_AXIS_TITLE: &str = "VE count";
pub const Y_AXIS_TITLE: &str = "Max RPS";

/// Order in which series get palette colors and legend rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SeriesOrder {
    /// Order in which request types first appear in the CSV.
    #[default]
    FirstSeen,
    /// Lexicographic by request type.
    Key,
}

#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub width: i32,
    pub height: i32,
    pub order: SeriesOrder,
    pub draw_labels: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        let base = RenderOptions::default();
        Self { width: base.width, height: base.height, order: SeriesOrder::default(), draw_labels: true }
    }
}

/// Build the chart model: one line per request type, colored by position in `order`.
pub fn build_chart(lines: &SeriesCollection, order: SeriesOrder, theme: &Theme) -> Chart {
    let ordered: Vec<_> = match order {
        SeriesOrder::FirstSeen => lines.iter().collect(),
        SeriesOrder::Key => lines.sorted_by_key(),
    };

    let mut chart = Chart::new();
    for (index, (key, line)) in ordered.into_iter().enumerate() {
        let style = SeriesStyle::new(theme.series_color(index), DEFAULT_STROKE_WIDTH);
        // Line keeps its columns the same length, so this never falls back
        let series = Series::from_columns(key, line.x_values(), line.y_values())
            .unwrap_or_else(|| Series::new(key));
        chart.add_series(series.with_style(style));
    }
    chart.x_axis = Axis::new(X_AXIS_TITLE, 0.0, 1.0);
    chart.y_axis = Axis::new(Y_AXIS_TITLE, 0.0, 1.0);
    chart.autoscale_axes();
    chart
}

/// Render `lines` to a PNG at `output`. The file is only created once the image has been
/// fully drawn and encoded.
pub fn render(lines: &SeriesCollection, output: impl AsRef<Path>, options: &ChartOptions) -> Result<(), RenderError> {
    let output = output.as_ref();
    let opts = RenderOptions {
        width: options.width,
        height: options.height,
        draw_labels: options.draw_labels,
        ..RenderOptions::default()
    };
    let chart = build_chart(lines, options.order, &opts.theme);
    chart.render_to_png(&opts, output)?;
    info!(path = %output.display(), series = chart.series.len(), "wrote chart");
    Ok(())
}
