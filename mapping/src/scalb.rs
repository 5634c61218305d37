//! Scaling of a double by an integral power of two.

const MANTISSA_BITS: u32 = 52;
const EXPONENT_MASK: u64 = 0x7ff;
const EXPONENT_BIAS: i64 = 1023;

const MIN_NORMAL_EXPONENT: i64 = -1022;
const MAX_NORMAL_EXPONENT: i64 = 1023;

// 2^52 and 2^-53
const TWO_POW_52: f64 = 4_503_599_627_370_496.0;
const TWO_POW_MINUS_53: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Returns `x * 2^n`.
///
/// The result is produced by adding `n` to the binary exponent of `x` rather
/// than by multiplying with a separately computed `2^n`, which would overflow
/// or flush to zero for large `|n|` well before the result itself leaves the
/// representable range.
///
/// Follows IEEE 754 `scalbn` semantics:
/// * `±0`, `±Inf` and NaN are returned unchanged
/// * a result too large to represent is an infinity with the sign of `x`
/// * a result too small to represent as a normal number underflows gradually
///   to a subnormal, and then to a zero with the sign of `x`
pub fn scalb(x: f64, n: i32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }

    // bring subnormals into the normal range so the exponent field is exact
    let (x, mut exponent) = if x.abs() < f64::MIN_POSITIVE {
        (x * TWO_POW_52, i64::from(n) - 52)
    } else {
        (x, i64::from(n))
    };

    let bits = x.to_bits();
    exponent += ((bits >> MANTISSA_BITS) & EXPONENT_MASK) as i64 - EXPONENT_BIAS;

    if exponent > MAX_NORMAL_EXPONENT {
        return f64::INFINITY.copysign(x);
    }

    // below half of the smallest subnormal everything rounds to zero
    if exponent < MIN_NORMAL_EXPONENT - 53 {
        return 0.0_f64.copysign(x);
    }

    // a subnormal result is assembled as a normal number and scaled down with
    // a single multiply so it is rounded exactly once
    let mut multiplier = 1.0;
    if exponent < MIN_NORMAL_EXPONENT {
        exponent += 53;
        multiplier = TWO_POW_MINUS_53;
    }

    let bits = (bits & !(EXPONENT_MASK << MANTISSA_BITS))
        | (((exponent + EXPONENT_BIAS) as u64) << MANTISSA_BITS);

    multiplier * f64::from_bits(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers_of_two() {
        assert_eq!(scalb(1.0, 0), 1.0);
        assert_eq!(scalb(1.0, 1), 2.0);
        assert_eq!(scalb(1.0, -1), 0.5);
        assert_eq!(scalb(3.0, 4), 48.0);
        assert_eq!(scalb(-3.0, -2), -0.75);
        assert_eq!(scalb(1.0, 1023), f64::from_bits(0x7fe0_0000_0000_0000));
        assert_eq!(scalb(1.0, -1022), f64::MIN_POSITIVE);
    }

    #[test]
    fn matches_multiplication() {
        for x in [1.0, 1.5, 0.1, -7.25, std::f64::consts::LOG2_E, 1e300, 1e-300] {
            for n in -64..=64 {
                assert_eq!(scalb(x, n), x * 2.0_f64.powi(n), "x: {x} n: {n}");
            }
        }
    }

    #[test]
    // the product is representable even though 2^n is not
    fn wide_exponents() {
        assert_eq!(scalb(f64::MAX, -1100), (2.0 - f64::EPSILON) * 2.0_f64.powi(-77));
        assert_eq!(scalb(f64::MIN_POSITIVE, 1024), 4.0);
        assert_eq!(scalb(f64::MIN_POSITIVE, 2045), 2.0_f64.powi(1023));
        assert_eq!(scalb(1.0e-300, 1000), 1.0e-300 * 2.0_f64.powi(500) * 2.0_f64.powi(500));

        // rounds up into the normal range
        assert_eq!(scalb(f64::MAX, -2046), f64::MIN_POSITIVE);
    }

    #[test]
    fn special_values() {
        assert_eq!(scalb(0.0, 100), 0.0);
        assert!(scalb(0.0, 100).is_sign_positive());
        assert_eq!(scalb(-0.0, -100), 0.0);
        assert!(scalb(-0.0, -100).is_sign_negative());
        assert_eq!(scalb(f64::INFINITY, -5000), f64::INFINITY);
        assert_eq!(scalb(f64::NEG_INFINITY, 5000), f64::NEG_INFINITY);
        assert!(scalb(f64::NAN, 1).is_nan());
        assert!(scalb(f64::NAN, i32::MIN).is_nan());
    }

    #[test]
    fn overflow() {
        assert_eq!(scalb(1.0, 1024), f64::INFINITY);
        assert_eq!(scalb(-1.0, 1024), f64::NEG_INFINITY);
        assert_eq!(scalb(f64::MAX, 1), f64::INFINITY);
        assert_eq!(scalb(1.0, i32::MAX), f64::INFINITY);
        assert_eq!(scalb(f64::from_bits(1), i32::MAX), f64::INFINITY);
    }

    #[test]
    fn underflow() {
        let min_subnormal = f64::from_bits(1);

        assert_eq!(scalb(1.0, -1074), min_subnormal);
        assert_eq!(scalb(1.0, -1073), f64::from_bits(2));
        assert_eq!(scalb(1.0, -1023), f64::MIN_POSITIVE / 2.0);

        // halfway to the smallest subnormal rounds to even, which is zero
        assert_eq!(scalb(1.0, -1075), 0.0);
        assert_eq!(scalb(1.5, -1075), min_subnormal);
        assert_eq!(scalb(1.0, -1076), 0.0);

        assert_eq!(scalb(1.0, i32::MIN), 0.0);
        assert!(scalb(-1.0, i32::MIN).is_sign_negative());
        assert_eq!(scalb(f64::MAX, i32::MIN), 0.0);
    }

    #[test]
    fn subnormal_input() {
        let min_subnormal = f64::from_bits(1);

        assert_eq!(scalb(min_subnormal, 1074), 1.0);
        assert_eq!(scalb(min_subnormal, 1), f64::from_bits(2));
        assert_eq!(scalb(f64::MIN_POSITIVE / 4.0, 2), f64::MIN_POSITIVE);
        assert_eq!(scalb(-min_subnormal, 2097), -(2.0_f64.powi(1023)));
        assert_eq!(scalb(min_subnormal, 2098), f64::INFINITY);
        assert_eq!(scalb(min_subnormal, -1), 0.0);
    }
}
