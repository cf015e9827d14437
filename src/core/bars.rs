//! One bar per enumerated float.

use crate::core::height::barheight;

/// A float paired with the height of its bar.
///
/// The bar is mirrored about the axis, so it spans `-height..=height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f32,
    pub height: f64,
}

impl Bar {
    #[inline]
    #[must_use]
    pub fn new(x: f32) -> Self {
        Self {
            x,
            height: barheight(x),
        }
    }
}

/// Lazily turn an enumeration into bars.
pub fn bars<I>(values: I) -> impl Iterator<Item = Bar>
where
    I: IntoIterator<Item = f32>,
{
    values.into_iter().map(Bar::new)
}

/// Width of a single bar in x units.
///
/// Every value is drawn twice (above and below the axis) and the width is
/// shared out over both, so `count` values split `span * width_factor`
/// into `2 * count` slots.
#[must_use]
pub fn bar_width(span: f64, width_factor: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let slots = (2 * count) as f64;
    span * width_factor / slots
}
