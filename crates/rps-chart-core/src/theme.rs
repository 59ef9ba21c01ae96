// File: crates/rps-chart-core/src/theme.rs
// Summary: Chart colors and the fixed series palette.

use skia_safe as skia;

/// Series colors, assigned by enumeration order and cycled when exhausted.
pub const PALETTE: [skia::Color; 8] = [
    skia::Color::from_argb(255, 0x00, 0x74, 0xD9), // blue
    skia::Color::from_argb(255, 0x00, 0xD9, 0x65), // green
    skia::Color::from_argb(255, 0xD9, 0x00, 0x74), // red
    skia::Color::from_argb(255, 0x00, 0xD9, 0xD2), // cyan
    skia::Color::from_argb(255, 0xD9, 0x65, 0x00), // orange
    skia::Color::from_argb(255, 0x74, 0x00, 0xD9), // purple
    skia::Color::from_argb(255, 0xD9, 0xD2, 0x00), // yellow
    skia::Color::from_argb(255, 0x33, 0x33, 0x33), // gray
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub palette: &'static [skia::Color],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            legend_background: skia::Color::from_argb(235, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 200, 200, 205),
            palette: &PALETTE,
        }
    }

    /// Color for the `index`-th series.
    pub fn series_color(&self, index: usize) -> skia::Color {
        if self.palette.is_empty() {
            return self.axis_line;
        }
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
