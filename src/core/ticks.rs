//! Tick placement and formatting for linear axes.
//!
//! Steps follow the usual "nice number" ladder: the raw step
//! `span / count` is snapped to 1, 2, 5 or 10 times a power of ten, and
//! ticks are the multiples of that step that fall inside the domain.

use smallvec::SmallVec;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Integer tick bounds plus increment. A negative increment encodes the
/// reciprocal of a sub-unit step so ticks can be produced without drift.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TickSpec {
    first: f64,
    last: f64,
    increment: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> TickSpec {
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

    let (mut first, mut last, increment);
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        first = (start * inc).round();
        last = (stop * inc).round();
        if first / inc < start {
            first += 1.0;
        }
        if last / inc > stop {
            last -= 1.0;
        }
        increment = -inc;
    } else {
        let inc = 10f64.powf(power) * factor;
        first = (start / inc).round();
        last = (stop / inc).round();
        if first * inc < start {
            first += 1.0;
        }
        if last * inc > stop {
            last -= 1.0;
        }
        increment = inc;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }

    TickSpec {
        first,
        last,
        increment,
    }
}

/// Returns roughly `count` evenly spaced, human-friendly values in `[start, stop]`.
///
/// A reversed domain yields ticks in descending order. Non-finite input or a
/// zero count yields no ticks; a degenerate domain yields the single value.
#[must_use]
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let spec = tick_spec(lo, hi, count as f64);
    if !(spec.last >= spec.first) || !spec.increment.is_finite() {
        return Vec::new();
    }

    let n = (spec.last - spec.first) as usize + 1;
    let mut ticks: Vec<f64> = (0..n)
        .map(|i| {
            let k = spec.first + i as f64;
            if spec.increment < 0.0 {
                k / -spec.increment
            } else {
                k * spec.increment
            }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Distance between adjacent ticks produced by [`linear_ticks`].
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return 0.0;
    }
    let (lo, hi) = if stop < start {
        (stop, start)
    } else {
        (start, stop)
    };
    let spec = tick_spec(lo, hi, count as f64);
    if spec.increment < 0.0 {
        -1.0 / spec.increment
    } else {
        spec.increment
    }
}

/// Number of fraction digits needed to print values spaced `step` apart.
#[must_use]
pub fn fraction_digits_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let exponent = step.abs().log10().floor();
    if exponent >= 0.0 {
        0
    } else {
        (-exponent) as usize
    }
}

/// Formats a tick value with thousands grouping and the precision implied by `step`.
#[must_use]
pub fn format_linear_tick(value: f64, step: f64) -> String {
    let digits = fraction_digits_for_step(step);
    let fixed = format!("{:.*}", digits, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped: SmallVec<[u8; 32]> = SmallVec::new();
    for (i, byte) in integer.bytes().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(b',');
        }
        grouped.push(byte);
    }

    let mut out = String::with_capacity(grouped.len() + 8);
    let is_zero = value == 0.0 || fixed.bytes().all(|b| b == b'0' || b == b'.');
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.extend(grouped.iter().map(|&b| char::from(b)));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
