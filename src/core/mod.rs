//! Aggregates the “business logic” layer.

pub mod bars;
pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod height;
pub mod range;
pub mod step;

// re-export frequently-used items for convenience
pub use bars::{Bar, bar_width, bars};
pub use bounds::Axis;
pub use color::{AnsiCode, colorize};
pub use config::{Config, ConfigBuilder};
pub use constants::{
    BORDER_WIDTH, BRAILLE_HORIZONTAL_RESOLUTION, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH,
};
pub use error::{ColorError, ConfigError, PlotError};
pub use height::barheight;
pub use range::{FloatRange, count_between, floatrange};
pub use step::{nextafterf, nextf, ordinal, prevf};
