// File: crates/rps-chart-core/src/legend.rs
// Summary: Legend box layout (one row per series: color swatch + label) and drawing.

use skia_safe as skia;

use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;

pub const FONT_SIZE: f32 = 13.0;
const PADDING: f32 = 8.0;
const SWATCH_LEN: f32 = 22.0;
const SWATCH_GAP: f32 = 8.0;
const ROW_HEIGHT: f32 = FONT_SIZE + 6.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendRow {
    /// Swatch line from `(swatch_x0, mid_y)` to `(swatch_x1, mid_y)`.
    pub swatch_x0: f32,
    pub swatch_x1: f32,
    pub mid_y: f32,
    pub text_x: f32,
    pub baseline: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub frame: skia::Rect,
    pub rows: Vec<LegendRow>,
}

/// Lay out a legend whose top-left corner sits at `origin`, given the rendered width
/// of each label. Rows keep the order of `label_widths`. No entries, no legend.
pub fn layout(label_widths: &[f32], origin: (f32, f32)) -> Option<LegendLayout> {
    if label_widths.is_empty() {
        return None;
    }
    let (ox, oy) = origin;
    let text_w = label_widths.iter().copied().fold(0.0f32, f32::max);
    let width = PADDING * 2.0 + SWATCH_LEN + SWATCH_GAP + text_w;
    let height = PADDING * 2.0 + ROW_HEIGHT * label_widths.len() as f32;

    let rows = (0..label_widths.len())
        .map(|i| {
            let top = oy + PADDING + ROW_HEIGHT * i as f32;
            let mid_y = top + ROW_HEIGHT * 0.5;
            LegendRow {
                swatch_x0: ox + PADDING,
                swatch_x1: ox + PADDING + SWATCH_LEN,
                mid_y,
                text_x: ox + PADDING + SWATCH_LEN + SWATCH_GAP,
                baseline: mid_y + FONT_SIZE * 0.35,
            }
        })
        .collect();

    Some(LegendLayout { frame: skia::Rect::from_xywh(ox, oy, width, height), rows })
}

/// Draw the legend for `series` anchored at `origin`. Without a `shaper` the labels are
/// left out; swatches and frame are always drawn.
pub(crate) fn draw(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    theme: &Theme,
    series: &[Series],
    origin: (f32, f32),
) {
    let widths: Vec<f32> = match shaper {
        Some(sh) => series.iter().map(|s| sh.measure_width(&s.name, FONT_SIZE)).collect(),
        None => series.iter().map(|_| 0.0).collect(),
    };
    let Some(legend) = layout(&widths, origin) else { return };

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_background);
    canvas.draw_rect(legend.frame, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_rect(legend.frame, &border);

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_style(skia::paint::Style::Stroke);
    swatch.set_stroke_cap(skia::paint::Cap::Round);

    for (row, s) in legend.rows.iter().zip(series) {
        swatch.set_color(s.style.color);
        swatch.set_stroke_width(s.style.stroke_width.min(ROW_HEIGHT * 0.5));
        canvas.draw_line((row.swatch_x0, row.mid_y), (row.swatch_x1, row.mid_y), &swatch);
        if let Some(sh) = shaper {
            sh.draw_left(canvas, &s.name, row.text_x, row.baseline, FONT_SIZE, theme.axis_label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_entries_no_legend() {
        assert!(layout(&[], (0.0, 0.0)).is_none());
    }

    #[test]
    fn rows_stack_in_order() {
        let l = layout(&[10.0, 40.0], (100.0, 50.0)).unwrap();
        assert_eq!(l.rows.len(), 2);
        assert!(l.rows[0].mid_y < l.rows[1].mid_y);
        assert_eq!(l.rows[0].swatch_x0, l.rows[1].swatch_x0);
        assert_eq!(l.frame.left, 100.0);
        assert_eq!(l.frame.top, 50.0);
    }

    #[test]
    fn frame_fits_widest_label() {
        let l = layout(&[10.0, 40.0], (0.0, 0.0)).unwrap();
        let text_right = l.rows[1].text_x + 40.0;
        assert!(l.frame.right >= text_right);
        assert!(l.frame.bottom >= l.rows[1].mid_y);
    }
}
