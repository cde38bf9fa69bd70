//! Fixed-point number text that matches what a browser prints for
//! `Number.prototype.toFixed`.
//!
//! Rust's `{:.N}` rounds exact binary ties to even (`0.125` becomes
//! "0.12"), a browser rounds them away from zero ("0.13"). Tooltips and
//! legend labels must read the same as the published chart, so they go
//! through [`to_fixed`].

/// Enough fraction digits to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// `value` with exactly `digits` fraction digits. Ties round away from
/// zero, the sign is kept for negative values that round to zero
/// (`-0.001` gives "-0.00"), and `-0.0` prints without a sign.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac = frac_part.as_bytes();

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain((0..digits).map(|i| frac.get(i).copied().unwrap_or(b'0')))
        .map(|b| b - b'0')
        .collect();

    if frac.get(digits).is_some_and(|&b| b >= b'5') {
        round_up(&mut kept);
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (i, d) in kept.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    out
}

/// Adds one unit in the last place, carrying leftwards.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.625, 2), "0.63");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_inexact_ties_follow_the_stored_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(8.16, 2), "8.16");
        assert_eq!(to_fixed(-0.5, 2), "-0.50");
    }

    #[test]
    fn test_carry_adds_an_integer_digit() {
        assert_eq!(to_fixed(9.96, 1), "10.0");
        assert_eq!(to_fixed(99.999, 2), "100.00");
    }

    #[test]
    fn test_sign_of_values_rounding_to_zero() {
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(0.0, 1), "0.0");
    }

    #[test]
    fn test_zero_digits_has_no_point() {
        assert_eq!(to_fixed(13.4, 0), "13");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
    }
}
