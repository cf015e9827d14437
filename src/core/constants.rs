//! A collection of constants.

/// The left and right border characters
pub const BORDER_WIDTH: usize = 2;
/// Title line plus the blank line under it
pub const CHROME_TOP_ROWS: usize = 2;
/// Tick border, tick labels and subtitle
pub const CHROME_BOTTOM_ROWS: usize = 3;

/// Graph must be at least 7 characters tall
pub const MIN_GRAPH_HEIGHT: usize = 7;
/// Graph must be at least 14 characters wide
pub const MIN_GRAPH_WIDTH: usize = 14;

/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Number of x axis ticks, spread evenly from the lower bound.
pub const TICK_COUNT: usize = 8;

/// Range bounds in the default title use six decimals.
///
/// 0.1 becomes 0.100000
pub const TITLE_PRECISION: usize = 6;

/// Height of a bar sitting on a whole number.
pub const INTEGER_HEIGHT: f64 = 0.75;
/// Height of a bar whose fraction needs more than `MAX_DYADIC_EXPONENT` bits.
pub const FALLBACK_HEIGHT: f64 = 0.03;
/// Finest power-of-two fraction the height classifier looks for.
pub const MAX_DYADIC_EXPONENT: u32 = 22;

/// Enumerations longer than this get a warning before we start walking.
pub const LARGE_ENUMERATION: usize = 50_000_000;
