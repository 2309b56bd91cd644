//! Lenient string-to-number conversions with a silent zero fallback.
//!
//! None of these fail: a missing or malformed input yields `0` (or `false`).
//! Integer parsing is prefix-based and stops at the first non-digit, so
//! `"12px"` parses as `12`.

macro_rules! lenient_int_parser {
    ($name:ident, $t:ty) => {
        /// Parse a leading signed decimal integer, returning `0` when absent.
        ///
        /// Leading `+` characters are skipped, then each leading `-` flips the
        /// sign. Digits accumulate until the first non-digit; overflow wraps.
        pub fn $name(s: Option<&str>) -> $t {
            let Some(s) = s else {
                return 0;
            };
            let bytes = s.as_bytes();
            let mut i = 0;
            while i < bytes.len() && bytes[i] == b'+' {
                i += 1;
            }
            let mut negative = false;
            while i < bytes.len() && bytes[i] == b'-' {
                negative = !negative;
                i += 1;
            }
            let mut out: $t = 0;
            for &b in &bytes[i..] {
                if !b.is_ascii_digit() {
                    break;
                }
                out = out.wrapping_mul(10).wrapping_add(<$t>::from(b - b'0'));
            }
            if negative {
                out.wrapping_neg()
            } else {
                out
            }
        }
    };
}

lenient_int_parser!(parse_int, i32);
lenient_int_parser!(parse_long, i64);

/// Accepted float text: an optional trailing `f`/`F`/`d`/`D` type suffix is
/// dropped, and the only non-numeric spellings are `NaN` and `Infinity`
/// (optionally signed, case-sensitive). Hex floats are not accepted.
fn float_text(s: &str) -> Option<&str> {
    let t = s.trim();
    if matches!(
        t,
        "NaN" | "+NaN" | "-NaN" | "Infinity" | "+Infinity" | "-Infinity"
    ) {
        return Some(t);
    }
    let t = t.strip_suffix(&['f', 'F', 'd', 'D'][..]).unwrap_or(t);
    // rejects std-only spellings such as `inf` and `nan`
    if t
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E'))
    {
        return None;
    }
    Some(t)
}

macro_rules! lenient_float_parser {
    ($name:ident, $t:ty) => {
        #[doc = concat!("Parse an `", stringify!($t), "`, returning `0.0` for `None` or malformed input.")]
        pub fn $name(s: Option<&str>) -> $t {
            let Some(t) = s.and_then(float_text) else {
                return 0.0;
            };
            match t.trim_start_matches('+') {
                "NaN" | "-NaN" => <$t>::NAN,
                "Infinity" => <$t>::INFINITY,
                "-Infinity" => <$t>::NEG_INFINITY,
                _ => t.parse().unwrap_or(0.0),
            }
        }
    };
}

lenient_float_parser!(parse_float, f32);
lenient_float_parser!(parse_double, f64);

/// `true` only for `"1"` or a case-insensitive `"true"`.
pub fn parse_bool(s: Option<&str>) -> bool {
    matches!(s, Some(s) if s == "1" || s.eq_ignore_ascii_case("true"))
}

/// `true` for any present, non-zero value.
#[inline]
pub fn int_to_bool(v: Option<i32>) -> bool {
    matches!(v, Some(v) if v != 0)
}

#[inline]
pub fn bool_to_int(b: bool) -> i32 {
    i32::from(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn int_prefix_parsing() {
        assert_eq!(parse_int(Some("42")), 42);
        assert_eq!(parse_int(Some("12px")), 12);
        assert_eq!(parse_int(Some("+7")), 7);
        assert_eq!(parse_int(Some("-7")), -7);
        assert_eq!(parse_int(Some("--7")), 7);
        assert_eq!(parse_int(Some("++-3")), -3);
        assert_eq!(parse_long(Some("9000000000")), 9_000_000_000);
    }

    #[test]
    fn int_silent_zero_fallback() {
        assert_eq!(parse_int(None), 0);
        assert_eq!(parse_int(Some("")), 0);
        assert_eq!(parse_int(Some("abc")), 0);
        assert_eq!(parse_int(Some(" 5")), 0);
        // a '+' after the sign run is not a digit
        assert_eq!(parse_int(Some("-+5")), 0);
        assert_eq!(parse_long(None), 0);
    }

    #[test]
    fn int_overflow_wraps() {
        assert_eq!(parse_int(Some("2147483648")), i32::MIN);
        assert_eq!(parse_int(Some("-2147483648")), i32::MIN);
    }

    #[test]
    fn float_parsing() {
        assert_eq!(parse_float(Some("1.5")), 1.5);
        assert_eq!(parse_double(Some(" -2.25 ")), -2.25);
        assert_eq!(parse_double(Some("1e3")), 1000.0);
        assert_eq!(parse_double(Some("nope")), 0.0);
        assert_eq!(parse_float(None), 0.0);
    }

    #[test]
    fn float_type_suffix_and_special_names() {
        assert_eq!(parse_float(Some("1.5f")), 1.5);
        assert_eq!(parse_double(Some("2d")), 2.0);
        assert_eq!(parse_double(Some("-3.5D")), -3.5);
        assert_eq!(parse_double(Some("1e2F")), 100.0);
        assert_eq!(parse_double(Some("Infinity")), f64::INFINITY);
        assert_eq!(parse_float(Some("-Infinity")), f32::NEG_INFINITY);
        assert!(parse_double(Some("NaN")).is_nan());
        // std spellings outside the accepted set fall back to zero
        assert_eq!(parse_double(Some("inf")), 0.0);
        assert_eq!(parse_double(Some("nan")), 0.0);
        assert_eq!(parse_double(Some("infinity")), 0.0);
        assert_eq!(parse_float(Some("1.5ff")), 0.0);
        assert_eq!(parse_double(Some("d")), 0.0);
    }

    #[test]
    fn int_to_bool_is_non_zero() {
        assert!(int_to_bool(Some(1)));
        assert!(int_to_bool(Some(-4)));
        assert!(!int_to_bool(Some(0)));
        assert!(!int_to_bool(None));
    }

    #[test]
    fn bool_parsing() {
        assert!(parse_bool(Some("1")));
        assert!(parse_bool(Some("TRUE")));
        assert!(parse_bool(Some("true")));
        assert!(!parse_bool(Some("yes")));
        assert!(!parse_bool(Some("0")));
        assert!(!parse_bool(None));
        assert_eq!(bool_to_int(true), 1);
        assert_eq!(bool_to_int(false), 0);
    }

    proptest! {
        #[test]
        fn int_round_trips_display(x in any::<i32>()) {
            prop_assert_eq!(parse_int(Some(&x.to_string())), x);
        }

        #[test]
        fn long_round_trips_display(x in any::<i64>()) {
            prop_assert_eq!(parse_long(Some(&x.to_string())), x);
        }
    }
}
