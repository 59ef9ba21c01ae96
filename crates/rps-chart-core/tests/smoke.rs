// File: crates/rps-chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use rps_chart_core::{Axis, Chart, RenderOptions, Series};

#[test]
fn render_smoke_png() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("VE count", 0.0, 4.0);
    chart.y_axis = Axis::new("Max RPS", 0.0, 4.0);
    chart.add_series(Series::with_data(
        "GET /items",
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
    ));

    let opts = RenderOptions::default();
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn file_and_bytes_match() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("A", vec![(1.0, 100.0), (3.0, 150.0)]));
    chart.autoscale_axes();

    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested/dir/chart.png");

    chart.render_to_png(&opts, &out).expect("render creates parent dirs");
    let on_disk = std::fs::read(&out).expect("read back");
    let in_memory = chart.render_to_png_bytes(&opts).expect("render bytes");
    // one PNG stream, not two concatenated
    assert_eq!(on_disk, in_memory);
    assert_eq!(on_disk.windows(8).filter(|w| *w == [137, 80, 78, 71, 13, 10, 26, 10]).count(), 1);
}

#[test]
fn empty_chart_renders() {
    let chart = Chart::new();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let bytes = chart.render_to_png_bytes(&opts).expect("axes-only chart renders");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
