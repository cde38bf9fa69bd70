//! Continuous linear scale and nice tick generation.

/// Maps a numeric domain onto a numeric range. Either may be inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Position of `x` in the range. Values outside the domain extrapolate.
    /// A zero-width domain maps everything to the middle of the range.
    pub fn scale(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (x - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Roughly `count` evenly spaced round values inside the domain, in
    /// ascending order.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (a, b) = self.domain;
        ticks(a.min(b), a.max(b), count as f64)
    }
}

// ---------------------------------------------------------------------------
// Tick steps
// ---------------------------------------------------------------------------

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Half-up rounding, matching the browser's `Math.round`.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// `(i1, i2, inc)` where tick k is `k * inc` for positive `inc` and
/// `k / -inc` for negative `inc`, k in `i1..=i2`.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * inv);
        i2 = round_half_up(stop * inv);
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = round_half_up(start / step);
        i2 = round_half_up(stop / step);
        if i1 * step < start {
            i1 += 1.0;
        }
        if i2 * step > stop {
            i2 -= 1.0;
        }
        inc = step;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// The step `ticks` would use, as a positive number.
pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    let (_, _, inc) = tick_spec(lo, hi, count);
    if inc < 0.0 { 1.0 / -inc } else { inc }
}

/// Nice ticks between `start` and `stop` (ascending, `start <= stop`).
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (i1, i2, inc) = tick_spec(start, stop, count);
    if !(i2 >= i1) || !inc.is_finite() {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    (0..n)
        .map(|k| {
            let i = i1 + k as f64;
            if inc < 0.0 { i / -inc } else { i * inc }
        })
        .collect()
}
