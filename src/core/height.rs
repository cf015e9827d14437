//! Bar heights from the dyadic structure of a value's fractional part.

use crate::core::constants::{FALLBACK_HEIGHT, INTEGER_HEIGHT, MAX_DYADIC_EXPONENT};

/// Height in `(0, 1]` telling how "simple" `v` is in binary.
///
/// Integers get [`INTEGER_HEIGHT`].  Otherwise the smallest `i` in
/// `1..=MAX_DYADIC_EXPONENT` for which the fractional part is a multiple of
/// `2^-i` gives `1 / (i + 1)`: halves are taller than quarters, quarters
/// taller than eighths, and so on.  Anything finer (or NaN) gets
/// [`FALLBACK_HEIGHT`].
#[must_use]
pub fn barheight(v: f32) -> f64 {
    let frac = fractional_part(f64::from(v));

    if frac == 0.0 {
        return INTEGER_HEIGHT;
    }
    for i in 1..=MAX_DYADIC_EXPONENT {
        // frac / 2^-i, exact for every tested i
        if (frac * f64::from(1_u32 << i)).fract() == 0.0 {
            return 1.0 / f64::from(i + 1);
        }
    }

    FALLBACK_HEIGHT
}

/// Signed fractional part; infinities count as whole numbers.
#[inline]
fn fractional_part(v: f64) -> f64 {
    if v.is_infinite() { 0.0 } else { v.fract() }
}
