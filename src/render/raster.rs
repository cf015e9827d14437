//! Bars to dot-column heights.
//!
//! Every braille cell is two dots wide, so the chart has `2 * x_chars`
//! dot columns.  Each bar covers the columns under `x ± width / 2` (always
//! at least the one under `x`), and a column keeps the tallest bar that
//! touches it.  Bars are consumed one at a time, so the enumeration never
//! has to be held in memory.

use crate::core::{
    bars::{Bar, bar_width},
    config::Config,
    constants::BRAILLE_HORIZONTAL_RESOLUTION as HR,
};

/// Tallest bar per dot column; `0.0` means nothing was drawn there.
#[derive(Clone, Debug, PartialEq)]
pub struct Columns {
    pub heights: Vec<f64>,
    /// Number of bars folded in.
    pub bars: usize,
}

impl Columns {
    /// Tallest bar anywhere on the chart.
    #[must_use]
    pub fn max_height(&self) -> f64 {
        self.heights.iter().copied().fold(0.0, f64::max)
    }
}

/// Maps x values to dot columns for one chart.
#[derive(Clone, Copy, Debug)]
pub struct ColumnScale {
    low: f64,
    span: f64,
    columns: usize,
}

impl ColumnScale {
    #[must_use]
    pub fn new(cfg: &Config) -> Self {
        Self {
            low: cfg.x_range.0,
            span: cfg.x_span(),
            columns: cfg.x_chars * HR,
        }
    }

    /// Dot column under `x`, clamped onto the chart.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn column(&self, x: f64) -> usize {
        let last = self.columns.saturating_sub(1);
        if self.span <= 0.0 {
            return last / 2;
        }
        let c = ((x - self.low) / self.span * self.columns as f64).floor();
        if c.is_nan() {
            return 0;
        }
        c.clamp(0.0, last as f64) as usize
    }
}

/// Fold `bars` into per-column heights.
///
/// `count` is the number of bars the iterator will produce; it sets the
/// bar width through [`bar_width`].
pub fn rasterize<I>(bars: I, cfg: &Config, count: usize) -> Columns
where
    I: IntoIterator<Item = Bar>,
{
    let scale = ColumnScale::new(cfg);
    // A zero, negative or NaN width still marks the column under `x`.
    let half = (bar_width(cfg.x_span(), cfg.width_factor, count) / 2.0).max(0.0);
    let mut out = Columns {
        heights: vec![0.0; cfg.x_chars * HR],
        bars: 0,
    };
    if out.heights.is_empty() {
        return out;
    }

    for bar in bars {
        let x = f64::from(bar.x);
        let first = scale.column(x - half);
        let last = scale.column(x + half);
        for h in &mut out.heights[first..=last] {
            *h = h.max(bar.height);
        }
        out.bars += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{bars::bars, range::FloatRange};
    use pretty_assertions::assert_eq;

    fn cfg(lo: f64, hi: f64, x_chars: usize) -> Config {
        Config::builder(x_chars, 8).x_range(lo, hi).build().unwrap()
    }

    #[test]
    fn columns_partition_the_range() {
        let s = ColumnScale::new(&cfg(0.0, 8.0, 4));
        assert_eq!(s.column(0.0), 0);
        assert_eq!(s.column(0.99), 0);
        assert_eq!(s.column(1.0), 1);
        assert_eq!(s.column(8.0), 7);
        assert_eq!(s.column(-5.0), 0);
        assert_eq!(s.column(50.0), 7);
    }

    #[test]
    fn zero_span_centres_everything() {
        let s = ColumnScale::new(&cfg(1.0, 1.0, 4));
        assert_eq!(s.column(1.0), 3);
        assert_eq!(s.column(-1.0), 3);
    }

    #[test]
    fn tallest_bar_wins() {
        let c = cfg(0.0, 1.0, 1);
        let cols = rasterize(
            [
                Bar { x: 0.1, height: 0.2 },
                Bar { x: 0.2, height: 0.6 },
                Bar { x: 0.3, height: 0.4 },
                Bar { x: 0.9, height: 0.1 },
            ],
            &c,
            4,
        );
        assert_eq!(cols.bars, 4);
        assert_eq!(cols.heights, vec![0.6, 0.1]);
        assert_eq!(cols.max_height(), 0.6);
    }

    #[test]
    fn wide_bars_spill_into_neighbours() {
        let c = Config::builder(4, 8)
            .x_range(0.0, 8.0)
            .width_factor(4.0)
            .build()
            .unwrap();
        // width = 8 * 4 / 2 = 16, covers everything
        let cols = rasterize([Bar { x: 4.0, height: 0.5 }], &c, 1);
        assert_eq!(cols.heights, vec![0.5; 8]);
    }

    #[test]
    fn narrow_bars_keep_their_own_column() {
        let c = cfg(0.0, 8.0, 4);
        let cols = rasterize([Bar { x: 2.5, height: 0.75 }], &c, 1000);
        assert_eq!(cols.heights, vec![0.0, 0.0, 0.75, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn degenerate_widths_keep_the_centre_column() {
        for w in [0.0, -3.0, f64::NAN] {
            let c = Config::builder(4, 8)
                .x_range(0.0, 8.0)
                .width_factor(w)
                .build()
                .unwrap();
            let cols = rasterize([Bar { x: 2.5, height: 0.75 }], &c, 1);
            assert_eq!(cols.heights, vec![0.0, 0.0, 0.75, 0.0, 0.0, 0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn integers_stand_out() {
        let c = cfg(0.999, 1.001, 20);
        let range = FloatRange::within(0.999, 1.001);
        let n = range.size_hint().0;
        let cols = rasterize(bars(range), &c, n);
        assert_eq!(cols.bars, n);
        assert_eq!(cols.max_height(), 0.75);
    }
}
