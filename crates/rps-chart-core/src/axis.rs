// File: crates/rps-chart-core/src/axis.rs
// Summary: Axis model with title and range, plus the linear value-to-pixel mapping.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 1.0)
    }

    /// Map `v` onto the pixel interval `[lo_px, hi_px]` (hi may be smaller than lo for Y).
    #[inline]
    pub fn to_px(&self, v: f64, lo_px: f32, hi_px: f32) -> f32 {
        // halved so `max - min` stays finite for ranges near ±f64::MAX; never zero
        let half_span = (self.max * 0.5 - self.min * 0.5).max(0.5e-9);
        let t = (v * 0.5 - self.min * 0.5) / half_span;
        lo_px + t as f32 * (hi_px - lo_px)
    }
}
