// File: crates/rps-chart-core/src/grid.rs
// Summary: Tick layout helpers (1/2/5 steps and their labels).

/// Round `raw` to a 1/2/5 x 10^k step.
fn nice_step(raw: f64) -> f64 {
    let exp = raw.log10().floor();
    let base = 10f64.powf(exp);
    let frac = raw / base;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Tick positions inside `[min, max]` on a 1/2/5 grid, aiming for about `target` ticks.
/// Returns the ticks and the step between them.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> (Vec<f64>, f64) {
    if !min.is_finite() || !max.is_finite() || max <= min || target == 0 {
        return (Vec::new(), 0.0);
    }
    // divide before subtracting: `max - min` overflows for ranges near ±f64::MAX
    let step = nice_step(max / target as f64 - min / target as f64);
    if !step.is_finite() || step <= 0.0 {
        return (Vec::new(), 0.0);
    }
    let first = (min / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut i = 0usize;
    // bounded in case `step` is lost to float precision next to huge values
    while i <= target * 4 + 2 {
        let v = first + step * i as f64;
        // tolerate float drift at the upper edge
        if v > max + step * 1e-9 { break; }
        ticks.push(if v.abs() < step * 1e-9 { 0.0 } else { v });
        i += 1;
    }
    (ticks, step)
}

/// Label for a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || step <= 0.0 {
        0
    } else {
        (-step.log10()).ceil().max(0.0) as usize
    };
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_land_on_round_numbers() {
        let (ticks, step) = nice_ticks(0.0, 200.0, 5);
        assert_eq!(step, 50.0);
        assert_eq!(ticks, vec![0.0, 50.0, 100.0, 150.0, 200.0]);
    }

    #[test]
    fn ticks_start_inside_range() {
        let (ticks, step) = nice_ticks(0.7, 3.2, 5);
        assert_eq!(step, 0.5);
        assert!((ticks[0] - 1.0).abs() < 1e-12);
        assert!(ticks.iter().all(|t| *t >= 0.7 && *t <= 3.2));
    }

    #[test]
    fn empty_range_has_no_ticks() {
        assert!(nice_ticks(1.0, 1.0, 5).0.is_empty());
        assert!(nice_ticks(f64::NAN, 1.0, 5).0.is_empty());
    }

    #[test]
    fn huge_range_gives_finite_ticks() {
        let (ticks, step) = nice_ticks(-1e308, 1e308, 8);
        assert!(step.is_finite() && step > 0.0);
        assert!(ticks.len() >= 2);
        assert!(ticks.iter().all(|t| t.is_finite()));
    }

    #[test]
    fn tick_labels_match_step_precision() {
        assert_eq!(format_tick(150.0, 50.0), "150");
        assert_eq!(format_tick(1.5, 0.5), "1.5");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
    }
}
