//! Minimum/maximum over a non-empty slice of any ordered `Copy` type.

use crate::MathError;

/// Smallest element of `values`.
///
/// The first element seeds the scan and is replaced only by strictly smaller
/// elements, so ties keep the earliest one. With floats a leading NaN wins and
/// later NaNs are skipped, which is what plain `PartialOrd` comparisons give.
pub fn min<T: PartialOrd + Copy>(values: &[T]) -> Result<T, MathError> {
    let (&first, rest) = values
        .split_first()
        .ok_or(MathError::InvalidArgument("min of an empty sequence"))?;
    let mut out = first;
    for &x in rest {
        if out > x {
            out = x;
        }
    }
    Ok(out)
}

/// Largest element of `values`. Mirrors [`min`].
pub fn max<T: PartialOrd + Copy>(values: &[T]) -> Result<T, MathError> {
    let (&first, rest) = values
        .split_first()
        .ok_or(MathError::InvalidArgument("max of an empty sequence"))?;
    let mut out = first;
    for &x in rest {
        if out < x {
            out = x;
        }
    }
    Ok(out)
}
