//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

/// Bad colour specification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour digit")]
    InvalidHexDigit,
    #[error("hex colour must be exactly 6 digits")]
    InvalidHexLength,
}

/// Precise configuration faults.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("configuration missing field `{0}`")]
    MissingField(&'static str),
    #[error("x_min {low} must be <= x_max {high}")]
    InvalidRange { low: f64, high: f64 },
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("The lower bound of the range cannot be greater than the upper bound!")]
    InvalidRange { min: f64, max: f64 },
    #[error("terminal too small: need ≥{want_w}×{want_h}, got {got_w}×{got_h}")]
    GraphTooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_message() {
        let e = PlotError::InvalidRange { min: 5.0, max: 1.0 };
        assert_eq!(
            e.to_string(),
            "The lower bound of the range cannot be greater than the upper bound!"
        );
    }

    #[test]
    fn nested_errors_are_transparent() {
        let e = PlotError::from(ConfigError::MissingField("x_range"));
        assert_eq!(e.to_string(), "configuration missing field `x_range`");
        let e = PlotError::from(ColorError::InvalidHexLength);
        assert_eq!(e.to_string(), "hex colour must be exactly 6 digits");
    }
}
