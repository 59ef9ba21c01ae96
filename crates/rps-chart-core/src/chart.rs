// File: crates/rps-chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::error::{RenderError, Result};
use crate::grid::{format_tick, nice_ticks};
use crate::legend;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, PlotRect, HEIGHT, WIDTH};
use crate::{Axis, ViewState};

const TICK_FONT_SIZE: f32 = 12.0;
const TITLE_FONT_SIZE: f32 = 14.0;
const TICK_LEN: f32 = 5.0;
const X_TICK_TARGET: usize = 8;
const Y_TICK_TARGET: usize = 6;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (titles, tick labels, legend labels) depends on installed fonts; turn it off
    /// for pixel-exact output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Draw a legend box listing every series.
    pub legend: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: true,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the data currently in the chart.
    pub fn autoscale_axes(&mut self) {
        ViewState::from_chart(self).apply_to_chart(self);
    }

    /// Render into a tightly packed RGBA8 (unpremultiplied) buffer.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| RenderError::Surface(format!("cannot allocate {w}x{h} raster surface")))?;

        self.paint(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Surface("reading back raster pixels failed".into()));
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Render and encode as PNG in memory. The image is encoded exactly once.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| RenderError::Surface("pixel buffer does not match surface size".into()))?;
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    /// Nothing is written unless drawing and encoding both succeed.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        debug!(
            path = %path.display(),
            bytes = bytes.len(),
            series = self.series.len(),
            "encoded chart"
        );

        let write_err = |source| RenderError::FileWrite { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, &bytes).map_err(write_err)?;
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let plot = PlotRect::from_insets(opts.width, opts.height, &opts.insets);
        let shaper = opts.draw_labels.then(TextShaper::new);

        canvas.clear(theme.background);

        let (x_ticks, x_step) = nice_ticks(self.x_axis.min, self.x_axis.max, X_TICK_TARGET);
        let (y_ticks, y_step) = nice_ticks(self.y_axis.min, self.y_axis.max, Y_TICK_TARGET);

        draw_grid(canvas, &plot, theme, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks);
        draw_axes(canvas, &plot, theme, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks);
        if let Some(sh) = shaper.as_ref() {
            draw_labels(canvas, sh, &plot, theme, self, (x_ticks.as_slice(), x_step), (y_ticks.as_slice(), y_step));
        }

        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom),
            skia::ClipOp::Intersect,
            true,
        );
        for s in &self.series {
            draw_line_series(canvas, &plot, &self.x_axis, &self.y_axis, s);
        }
        canvas.restore();

        if self.legend {
            legend::draw(canvas, shaper.as_ref(), theme, &self.series, (plot.left + 12.0, plot.top + 12.0));
        }
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    theme: &Theme,
    x: &Axis,
    y: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for &v in x_ticks {
        let px = x.to_px(v, plot.left, plot.right);
        canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
    }
    for &v in y_ticks {
        let py = y.to_px(v, plot.bottom, plot.top);
        canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    theme: &Theme,
    x: &Axis,
    y: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &axis_paint);
    canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &axis_paint);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    for &v in x_ticks {
        let px = x.to_px(v, plot.left, plot.right);
        canvas.draw_line((px, plot.bottom), (px, plot.bottom + TICK_LEN), &tick_paint);
    }
    for &v in y_ticks {
        let py = y.to_px(v, plot.bottom, plot.top);
        canvas.draw_line((plot.left - TICK_LEN, py), (plot.left, py), &tick_paint);
    }
}

fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &PlotRect,
    theme: &Theme,
    chart: &Chart,
    (x_ticks, x_step): (&[f64], f64),
    (y_ticks, y_step): (&[f64], f64),
) {
    for &v in x_ticks {
        let px = chart.x_axis.to_px(v, plot.left, plot.right);
        let label = format_tick(v, x_step);
        shaper.draw_centered(canvas, &label, px, plot.bottom + TICK_LEN + 14.0, TICK_FONT_SIZE, theme.tick);
    }
    for &v in y_ticks {
        let py = chart.y_axis.to_px(v, plot.bottom, plot.top);
        let label = format_tick(v, y_step);
        shaper.draw_right(canvas, &label, plot.left - TICK_LEN - 4.0, py + 4.0, TICK_FONT_SIZE, theme.tick);
    }

    let x_center = plot.left + plot.width() * 0.5;
    shaper.draw_centered(canvas, &chart.x_axis.label, x_center, plot.bottom + 48.0, TITLE_FONT_SIZE, theme.axis_label);
    shaper.draw_left(canvas, &chart.y_axis.label, 8.0, plot.top - 14.0, TITLE_FONT_SIZE, theme.axis_label);
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
) {
    let sx = |x: f64| x_axis.to_px(x, plot.left, plot.right);
    let sy = |y: f64| y_axis.to_px(y, plot.bottom, plot.top);

    let points: Vec<(f32, f32)> = series
        .data_xy
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&(x, y)| (sx(x), sy(y)))
        .collect();

    match points.as_slice() {
        [] => {}
        [only] => {
            // a lone measurement has no segment; show it as a dot
            let mut dot = skia::Paint::default();
            dot.set_anti_alias(true);
            dot.set_style(skia::paint::Style::Fill);
            dot.set_color(series.style.color);
            canvas.draw_circle(*only, series.style.stroke_width.max(2.0), &dot);
        }
        [first, rest @ ..] => {
            let mut path = skia::Path::new();
            path.move_to(*first);
            for &p in rest {
                path.line_to(p);
            }

            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_join(skia::paint::Join::Round);
            stroke.set_stroke_cap(skia::paint::Cap::Round);
            stroke.set_stroke_width(series.style.stroke_width);
            stroke.set_color(series.style.color);

            canvas.draw_path(&path, &stroke);
        }
    }
}
