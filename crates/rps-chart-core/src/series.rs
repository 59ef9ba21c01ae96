// File: crates/rps-chart-core/src/series.rs
// Summary: Named line series with per-series stroke style.

use skia_safe as skia;

use crate::types::DEFAULT_STROKE_WIDTH;

/// Per-series stroke style. Color and width are the only styling knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub color: skia::Color,
    pub stroke_width: f32,
}

impl SeriesStyle {
    pub fn new(color: skia::Color, stroke_width: f32) -> Self {
        Self { color, stroke_width: stroke_width.max(0.5) }
    }
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self::new(skia::Color::from_argb(255, 0, 116, 217), DEFAULT_STROKE_WIDTH)
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    /// Legend label.
    pub name: String,
    pub data_xy: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), data_xy: Vec::new(), style: SeriesStyle::default() }
    }

    pub fn with_data(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data_xy: data, style: SeriesStyle::default() }
    }

    /// Build from two parallel coordinate slices, pairing the i-th X with the i-th Y.
    /// Returns `None` when the slices differ in length.
    pub fn from_columns(name: impl Into<String>, xs: &[f64], ys: &[f64]) -> Option<Self> {
        if xs.len() != ys.len() {
            return None;
        }
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Some(Self::with_data(name, data))
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_columns_pairs_in_order() {
        let s = Series::from_columns("A", &[1.0, 3.0], &[100.0, 150.0]).unwrap();
        assert_eq!(s.name, "A");
        assert_eq!(s.data_xy, vec![(1.0, 100.0), (3.0, 150.0)]);
    }

    #[test]
    fn from_columns_rejects_length_mismatch() {
        assert!(Series::from_columns("A", &[1.0], &[]).is_none());
    }

    #[test]
    fn new_series_is_empty() {
        let s = Series::new("A");
        assert!(s.data_xy.is_empty());
        assert_eq!(s.style, SeriesStyle::default());
    }

    #[test]
    fn stroke_width_has_floor() {
        let style = SeriesStyle::new(skia::Color::BLACK, 0.0);
        assert_eq!(style.stroke_width, 0.5);
    }
}
