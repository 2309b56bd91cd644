//! Normalization against a range and clamping into one.

/// Position of `value` within the range spanned by `from` and `to`, as a
/// fraction of its width.
///
/// The bounds may come in either order. The result is not clamped: values
/// outside the range land outside `[0, 1]`. An empty range (`from == to`)
/// divides by zero and yields infinity or NaN.
#[inline]
pub fn normalize(value: f64, from: f64, to: f64) -> f64 {
    let lo = from.min(to);
    let hi = from.max(to);
    (value - lo) / (hi - lo)
}

/// `value` bounded into `[min, max]`.
///
/// Computed as `max(min, min(max, value))`, so for `min > max` the result is
/// always `min`. Callers are expected to pass `min <= max`.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let upper = if max < value { max } else { value };
    if upper < min {
        min
    } else {
        upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_is_order_independent() {
        let expected = 4.0 / 9.0;
        assert!((normalize(5.0, 1.0, 10.0) - expected).abs() < 1e-15);
        assert!((normalize(5.0, 10.0, 1.0) - expected).abs() < 1e-15);
    }

    #[test]
    fn normalize_is_unclamped() {
        assert_eq!(normalize(20.0, 0.0, 10.0), 2.0);
        assert_eq!(normalize(-5.0, 10.0, 0.0), -0.5);
        assert_eq!(normalize(0.0, 0.0, 10.0), 0.0);
        assert_eq!(normalize(10.0, 0.0, 10.0), 1.0);
    }

    #[test]
    fn normalize_empty_range_is_non_finite() {
        assert_eq!(normalize(2.0, 1.0, 1.0), f64::INFINITY);
        assert!(normalize(1.0, 1.0, 1.0).is_nan());
    }

    #[test]
    fn clamp_examples() {
        assert_eq!(clamp(15, 0, 10), 10);
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(2.5_f32, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.5_f64, 0.0, 1.0), 0.0);
    }

    #[test]
    fn clamp_inverted_bounds_prefers_min() {
        assert_eq!(clamp(5, 10, 0), 10);
        assert_eq!(clamp(-3, 10, 0), 10);
    }

    proptest! {
        #[test]
        fn clamp_stays_in_bounds(v in any::<i32>(), a in any::<i32>(), b in any::<i32>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let c = clamp(v, lo, hi);
            prop_assert!(lo <= c && c <= hi);
            prop_assert_eq!(c, v.clamp(lo, hi));
        }

        #[test]
        fn normalize_endpoints(a in -1.0e3f64..1.0e3, w in 1.0e-3f64..1.0e3) {
            let b = a + w;
            prop_assert!(normalize(a, a, b).abs() < 1e-12);
            prop_assert!((normalize(b, b, a) - 1.0).abs() < 1e-9);
        }
    }
}
