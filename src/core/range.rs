//! Exhaustive enumeration of the floats between two bounds.

use crate::core::step::{nextafterf, nextf, ordinal, prevf};

/// Lazy walk over every `f32` from a start value towards an end value.
///
/// The first value is always the start.  Each following value is one step
/// towards the end, and the walk stops as soon as a step no longer goes
/// up.  With `start <= end` this yields every float in `[start, end]` in
/// increasing order; with `start > end` it yields only `start`.
#[derive(Clone, Debug)]
pub struct FloatRange {
    next: Option<f32>,
    end: f32,
}

impl FloatRange {
    #[inline]
    #[must_use]
    pub fn new(start: f32, end: f32) -> Self {
        Self {
            next: Some(start),
            end,
        }
    }

    /// Every `f32` lying inside the real interval `[min, max]`.
    ///
    /// The bounds are snapped inwards onto the `f32` grid.  When no
    /// single-precision value falls between them (`0.1..=0.1`, say), the
    /// walk is the one `f32` nearest to `min`.
    #[must_use]
    pub fn within(min: f64, max: f64) -> Self {
        let (start, end) = (at_or_above(min), at_or_below(max));
        if start <= end {
            Self::new(start, end)
        } else {
            #[allow(clippy::cast_possible_truncation)]
            let nearest = min as f32;
            Self::new(nearest, nearest)
        }
    }

    /// First value still to be yielded.
    #[inline]
    #[must_use]
    pub fn start(&self) -> Option<f32> {
        self.next
    }

    #[inline]
    #[must_use]
    pub fn end(&self) -> f32 {
        self.end
    }
}

impl Iterator for FloatRange {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let x = self.next.take()?;
        let z = nextafterf(x, self.end);
        if x < z {
            self.next = Some(z);
        }
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(x) if x.is_nan() || self.end.is_nan() || x >= self.end => (1, Some(1)),
            Some(x) => match usize::try_from(ordinal(self.end) - ordinal(x) + 1) {
                Ok(n) => (n, Some(n)),
                Err(_) => (usize::MAX, None),
            },
        }
    }
}

/// Collect the walk from `x` to `y` into a vector.
///
/// `floatrange(x, x)` is `[x]`.  Expect very long vectors for wide ranges or
/// ranges close to zero.
#[must_use]
pub fn floatrange(x: f32, y: f32) -> Vec<f32> {
    FloatRange::new(x, y).collect()
}

/// How many values `floatrange(x, y)` yields, without walking.
#[must_use]
pub fn count_between(x: f32, y: f32) -> usize {
    FloatRange::new(x, y).size_hint().0
}

/// Smallest `f32` that is not below `x`.
#[must_use]
pub fn at_or_above(x: f64) -> f32 {
    #[allow(clippy::cast_possible_truncation)]
    let f = x as f32;
    if f64::from(f) < x { nextf(f) } else { f }
}

/// Largest `f32` that is not above `x`.
#[must_use]
pub fn at_or_below(x: f64) -> f32 {
    #[allow(clippy::cast_possible_truncation)]
    let f = x as f32;
    if f64::from(f) > x { prevf(f) } else { f }
}
