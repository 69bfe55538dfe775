use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

/// Smallest decimal exponent rendered in positional notation.
const MIN_POSITIONAL_EXPONENT: i32 = -4;
/// Decimal exponent from which rendering switches to scientific notation.
const MAX_POSITIONAL_EXPONENT: i32 = 16;

/// Converts an integer operand to `f64` for mixed arithmetic and division.
///
/// Values beyond `2^53` round to the nearest representable float; values
/// beyond the float range become infinite with the integer's sign.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use octconf::util::num::bigint_to_f64;
///
/// assert_eq!(bigint_to_f64(&BigInt::from(42)), 42.0);
/// assert_eq!(bigint_to_f64(&(BigInt::from(-1) << 2000)), f64::NEG_INFINITY);
/// ```
#[must_use]
pub fn bigint_to_f64(value: &BigInt) -> f64 {
    value.to_f64().unwrap_or_else(|| {
                      if value.is_negative() { f64::NEG_INFINITY } else { f64::INFINITY }
                  })
}

/// Renders a float as the shortest text that reads back to the same value.
///
/// The output always marks the value as a float: integral values keep a
/// `.0` suffix, and magnitudes below `1e-4` or from `1e16` upwards use
/// scientific notation with a signed, at least two-digit exponent.
/// Non-finite values render as `inf`, `-inf` and `nan`.
///
/// ## Example
/// ```
/// use octconf::util::num::format_float;
///
/// assert_eq!(format_float(6.0), "6.0");
/// assert_eq!(format_float(2.5), "2.5");
/// assert_eq!(format_float(1e16), "1e+16");
/// assert_eq!(format_float(0.00001), "1e-05");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `-1.25e-7`.
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if (MIN_POSITIONAL_EXPONENT..MAX_POSITIONAL_EXPONENT).contains(&exponent) {
        positional(&digits, exponent)
    } else {
        exponential(&digits, exponent)
    };

    format!("{sign}{body}")
}

/// Places the decimal point into `digits` for the given exponent.
fn positional(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
        return format!("0.{zeros}{digits}");
    }

    let int_len = exponent.unsigned_abs() as usize + 1;
    if digits.len() > int_len {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    } else {
        format!("{digits}{}.0", "0".repeat(int_len - digits.len()))
    }
}

/// Renders `d.ddd e±XX`.
fn exponential(digits: &str, exponent: i32) -> String {
    let (first, rest) = digits.split_at(1);
    let fraction = if rest.is_empty() { String::new() } else { format!(".{rest}") };
    let exp_sign = if exponent < 0 { '-' } else { '+' };

    format!("{first}{fraction}e{exp_sign}{:02}", exponent.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn integral_floats_keep_a_fraction() {
        assert_eq!(format_float(6.0), "6.0");
        assert_eq!(format_float(-12.0), "-12.0");
        assert_eq!(format_float(100.0), "100.0");
        assert_eq!(format_float(1e15), "1000000000000000.0");
    }

    #[test]
    fn fractions_use_shortest_digits() {
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(123.456), "123.456");
    }

    #[test]
    fn large_and_small_magnitudes_are_scientific() {
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e-5), "1.5e-05");
        assert_eq!(format_float(-2.5e100), "-2.5e+100");
        assert_eq!(format_float(1.2345678901234568e17), "1.2345678901234568e+17");
    }

    #[test]
    fn integers_promote_beyond_sixty_four_bits() {
        let big = BigInt::from(1_u64 << 63) * 4;
        assert_eq!(bigint_to_f64(&big), 36_893_488_147_419_103_232.0);
        assert_eq!(bigint_to_f64(&(BigInt::from(1) << 1100)), f64::INFINITY);
    }

    #[test]
    fn special_values() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_float(f64::NAN), "nan");
    }
}
