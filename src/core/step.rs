//! Adjacent-value stepping on the single-precision float line.
//!
//! Every step reinterprets the 4-byte native encoding of an `f32` as an
//! `i32` and moves the integer by one.  Non-negative patterns grow towards
//! `+∞` as the integer grows; negative patterns grow towards `-∞` as the
//! integer *shrinks*, so the step direction depends on the sign.

/// The float right after `x`.
///
/// NaN and `+∞` come back unchanged.  Both zeros step to the smallest
/// positive subnormal.
#[must_use]
pub fn nextf(x: f32) -> f32 {
    if x.is_nan() || x == f32::INFINITY {
        return x;
    }

    // -0.0 == 0.0, so this folds the negative zero onto the positive one.
    let x = if x == 0.0 { 0.0 } else { x };

    let n = i32::from_ne_bytes(x.to_ne_bytes());
    let n = if n >= 0 { n + 1 } else { n - 1 };
    f32::from_ne_bytes(n.to_ne_bytes())
}

/// The float right before `x`.
#[inline]
#[must_use]
pub fn prevf(x: f32) -> f32 {
    -nextf(-x)
}

/// One step from `x` towards `y`.
///
/// A NaN on either side is returned as-is, `x` first.
#[must_use]
pub fn nextafterf(x: f32, y: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    if y.is_nan() {
        return y;
    }

    if y == x {
        y
    } else if y > x {
        nextf(x)
    } else {
        prevf(x)
    }
}

/// Position of `x` on the float line: adjacent values differ by exactly one
/// and both zeros share position 0.
///
/// Meaningless for NaN.
#[inline]
#[must_use]
pub fn ordinal(x: f32) -> i64 {
    let bits = x.to_bits();
    let magnitude = i64::from(bits & 0x7FFF_FFFF);
    if bits & 0x8000_0000 == 0 {
        magnitude
    } else {
        -magnitude
    }
}
