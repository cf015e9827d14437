//! Geometry helpers: axis ranges, ticks + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::{
    constants::{
        BORDER_WIDTH, CHROME_BOTTOM_ROWS, CHROME_TOP_ROWS, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH,
        TICK_COUNT, TITLE_PRECISION,
    },
    range::at_or_below,
    step::{nextf, prevf},
};

/// Which axis we’re measuring.
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Plot bounds for the data extremes `low..=high`.
    ///
    /// * X keeps the requested range.  A single-point range widens to the
    ///   neighbouring floats so the lone bar sits in the middle.
    /// * Y mirrors the tallest bar `high` about the axis; `low` is ignored.
    /// * Non-finite input falls back to `(0.0, 1.0)` / `(-1.0, 1.0)`.
    #[must_use]
    pub fn bounds(self, low: f64, high: f64) -> (f64, f64) {
        match self {
            Self::X => {
                if !low.is_finite() || !high.is_finite() {
                    return (0.0, 1.0);
                }
                if low < high {
                    return (low, high);
                }
                let v = at_or_below(low);
                (f64::from(prevf(v)), f64::from(nextf(v)))
            }
            Self::Y => {
                if !high.is_finite() || high <= 0.0 {
                    return (-1.0, 1.0);
                }
                (-high, high)
            }
        }
    }
}

/// Evenly spaced ticks starting at `low`, `TICK_COUNT` of them, the upper
/// bound excluded.  A zero-width range gets a single tick.
#[must_use]
pub fn ticks(low: f64, high: f64) -> Vec<f64> {
    let span = high - low;
    if span <= 0.0 || !span.is_finite() {
        return vec![low];
    }
    #[allow(clippy::cast_precision_loss)]
    let step = span / TICK_COUNT as f64;
    (0..TICK_COUNT)
        .map(|k| {
            #[allow(clippy::cast_precision_loss)]
            let k = k as f64;
            k.mul_add(step, low)
        })
        .collect()
}

/// Decimals needed to tell ticks `step` apart.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn tick_decimals(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return TITLE_PRECISION;
    }
    ((-step.log10()).ceil() + 1.0).clamp(0.0, 12.0) as usize
}

/// Formatted tick label.
#[must_use]
pub fn tick_label(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Convert terminal dimensions to the graph char grid.
/// Leaves space for borders, title, ticks and one line for the prompt.
#[inline]
#[must_use]
pub fn graph_dims((w, h): (Width, Height)) -> (usize, usize) {
    let x_chars = std::cmp::max(
        MIN_GRAPH_WIDTH,
        usize::from(w.0).saturating_sub(BORDER_WIDTH),
    );
    let y_chars = std::cmp::max(
        MIN_GRAPH_HEIGHT,
        usize::from(h.0).saturating_sub(CHROME_TOP_ROWS + CHROME_BOTTOM_ROWS + 1),
    );
    (x_chars, y_chars)
}
