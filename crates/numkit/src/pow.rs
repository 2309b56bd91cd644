//! Binary exponentiation (exponentiation by squaring).
//!
//! Integer and float impls deliberately disagree on negative exponents:
//! - `i32`/`i64`: `x^n` for `n < 0` is `0` (no fractional representation), and
//!   `0^0` is `0`. Products wrap on overflow.
//! - `f32`/`f64`: `x^n` for `n < 0` is `1 / x^|n|`, and `x^0` is `1` for all `x`.
//!
//! Existing callers rely on the integer truncation, so it is kept as is.

/// `self` raised to a signed integer power in O(log |exp|) multiplications.
pub trait FastPow: Sized {
    fn fast_pow(self, exp: i32) -> Self;
}

/// Free-function form of [`FastPow::fast_pow`].
#[inline]
pub fn fast_pow<T: FastPow>(base: T, exp: i32) -> T {
    base.fast_pow(exp)
}

macro_rules! impl_fast_pow_int {
    ($($t:ty),*) => {$(
        impl FastPow for $t {
            fn fast_pow(self, exp: i32) -> Self {
                if exp == 0 {
                    return if self == 0 { 0 } else { 1 };
                }
                if exp < 0 {
                    return 0;
                }
                // n = 0b101101 -> acc = x * x^4 * x^8 * x^32
                let mut base = self;
                let mut n = exp as u32;
                let mut acc: $t = 1;
                while n > 0 {
                    if n & 1 == 1 {
                        acc = acc.wrapping_mul(base);
                    }
                    n >>= 1;
                    // skip the final squaring; it is unused and may overflow
                    if n > 0 {
                        base = base.wrapping_mul(base);
                    }
                }
                acc
            }
        }
    )*};
}

macro_rules! impl_fast_pow_float {
    ($($t:ty),*) => {$(
        impl FastPow for $t {
            fn fast_pow(self, exp: i32) -> Self {
                let mut n = exp.unsigned_abs();
                let mut base = self;
                let mut acc: $t = 1.0;
                while n > 0 {
                    if n & 1 == 1 {
                        acc *= base;
                    }
                    n >>= 1;
                    if n > 0 {
                        base *= base;
                    }
                }
                if exp < 0 {
                    1.0 / acc
                } else {
                    acc
                }
            }
        }
    )*};
}

impl_fast_pow_int!(i32, i64);
impl_fast_pow_float!(f32, f64);
