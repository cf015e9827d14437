//! Public-facing crate root – re-exports + the enumerate → classify → lay out
//! pipeline.
//!
//! ```
//! use float_bars::{barheight, floatrange, nextf};
//!
//! let v = floatrange(1.0, nextf(nextf(1.0)));
//! assert_eq!(v.len(), 3);
//! assert_eq!(barheight(0.25), 1.0 / 3.0);
//! ```

pub mod cli;
pub mod core;
pub mod render;

use log::{debug, warn};

pub use crate::core::{
    bars::{Bar, bars},
    color::AnsiCode,
    config::{Config, ConfigBuilder},
    constants::{LARGE_ENUMERATION, TITLE_PRECISION},
    error::{ColorError, ConfigError, PlotError},
    height::barheight,
    range::{FloatRange, count_between, floatrange},
    step::{nextafterf, nextf, prevf},
};

pub use render::{
    BraillePlot, Columns, Renderer, preprocess_to_braille, rasterize,
};

/// Title used when none is given: the requested range with six decimals.
#[must_use]
pub fn default_title(min: f64, max: f64) -> String {
    format!("IEEE 754 single-precision data points in [{min:.TITLE_PRECISION$}, {max:.TITLE_PRECISION$}]")
}

/// Enumerate every `f32` in `[min, max]` and lay the bars out on the braille
/// grid described by `cfg`.
///
/// The enumeration is streamed straight into the rasteriser.  Very large
/// ranges are walked anyway; only a warning is logged.
pub fn chart(min: f64, max: f64, cfg: &Config) -> Result<BraillePlot, PlotError> {
    if min > max {
        return Err(PlotError::InvalidRange { min, max });
    }

    let range = FloatRange::within(min, max);
    let count = range.size_hint().0;
    if count > LARGE_ENUMERATION {
        warn!("enumerating {count} values, consider a narrower range");
    }
    debug!(
        "snapped [{min}, {max}] to [{:?}, {}]: {count} values",
        range.start(),
        range.end()
    );

    let columns = rasterize(bars(range), cfg, count);
    debug!(
        "folded {} bars into {} dot columns",
        columns.bars,
        columns.heights.len()
    );
    Ok(preprocess_to_braille(&columns, cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_uses_six_decimals() {
        assert_eq!(
            default_title(1.0, 2.5),
            "IEEE 754 single-precision data points in [1.000000, 2.500000]"
        );
    }

    #[test]
    fn chart_rejects_reversed_range() {
        let cfg = Config::builder(20, 8).x_range(1.0, 5.0).build().unwrap();
        assert!(matches!(
            chart(5.0, 1.0, &cfg),
            Err(PlotError::InvalidRange { .. })
        ));
    }

    #[test]
    fn chart_draws_nearest_float_in_a_gap() {
        for (lo, hi) in [(0.1, 0.1), (1.0 + 1e-9, 1.0 + 2e-9)] {
            let cfg = Config::builder(20, 8).x_range(lo, hi).build().unwrap();
            let plot = chart(lo, hi, &cfg).unwrap();
            assert!(plot.spans.iter().any(Option::is_some), "[{lo}, {hi}]");
        }
    }
}
