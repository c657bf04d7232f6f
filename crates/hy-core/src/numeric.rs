use crate::HyError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HyError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HyError::NonFinite { what, value: v })
    }
}

/// Divide, returning 0 when the denominator is not strictly positive.
///
/// Degenerate inputs map to zero instead of raising, so a missing pipe size or
/// a zero efficiency yields a defined (flagged) number downstream.
#[inline]
pub fn guarded_div(num: Real, den: Real) -> Real {
    if den > 0.0 { num / den } else { 0.0 }
}

/// Clamp into `[lo, hi]`, mapping NaN to `lo`.
#[inline]
pub fn clamp_or_floor(value: Real, lo: Real, hi: Real) -> Real {
    if value.is_nan() {
        lo
    } else {
        value.clamp(lo, hi)
    }
}
