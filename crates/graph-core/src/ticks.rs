// File: crates/graph-core/src/ticks.rs
// Summary: Tick placement ("nice" steps) and tick label formatting.

/// Step of the form {1, 2, 2.5, 5} x 10^k giving roughly `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !(span.is_finite() && span > 0.0) || target == 0 {
        return 1.0;
    }
    let raw = span / target as f64;
    let mag = 10f64.powi(raw.log10().floor() as i32);
    let norm = raw / mag;
    let mult = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    mult * mag
}

/// Tick positions inside `[min, max]` with a nice step; also returns the step.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> (Vec<f64>, f64) {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step(hi - lo, target);
    let eps = step * 1e-9;
    let first = (lo / step - 1e-9).ceil();
    let mut ticks = Vec::new();
    let mut k = first;
    loop {
        let v = k * step;
        if v > hi + eps || ticks.len() > 64 { break; }
        ticks.push(if v.abs() < eps { 0.0 } else { v });
        k += 1.0;
    }
    (ticks, step)
}

/// Label for a tick at `v` on an axis stepping by `step`.
/// Magnitudes under 1e-3 or at/above 1e5 switch to scientific notation.
pub fn format_tick(v: f64, step: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let mag = v.abs().max(step.abs());
    if mag < 1e-3 || mag >= 1e5 {
        let digits = fraction_digits(step / 10f64.powi(v.abs().log10().floor() as i32));
        return format!("{:.*e}", digits.min(3), v);
    }
    format!("{:.*}", fraction_digits(step), v)
}

/// Number of fractional digits needed to print multiples of `step` exactly.
fn fraction_digits(step: f64) -> usize {
    let step = step.abs();
    (0..=6)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6 * scaled.max(1.0)
        })
        .unwrap_or(6)
}
