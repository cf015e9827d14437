//! Run-time configuration object + fluent builder.

use crate::core::{color::AnsiCode, error::ConfigError};

/// Immutable parameters handed to the rasteriser and renderer.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` draws a plain top border.
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Horizontal extent of the chart.
    pub x_range: (f64, f64),
    pub width_factor: f64,
    pub x_chars: usize,
    pub y_chars: usize,
    pub color: AnsiCode,
}

impl Config {
    #[inline]
    pub fn builder(x_chars: usize, y_chars: usize) -> ConfigBuilder {
        ConfigBuilder::new(x_chars, y_chars)
    }

    /// Horizontal span covered by the chart.
    #[inline]
    #[must_use]
    pub fn x_span(&self) -> f64 {
        self.x_range.1 - self.x_range.0
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    x_chars: usize,
    y_chars: usize,
    title: Option<String>,
    subtitle: Option<String>,
    x_range: Option<(f64, f64)>,
    width_factor: f64,
    color: Option<AnsiCode>,
}

impl ConfigBuilder {
    pub(crate) fn new(x_chars: usize, y_chars: usize) -> Self {
        Self {
            x_chars,
            y_chars,
            title: None,
            subtitle: None,
            x_range: None,
            width_factor: 1.0,
            color: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn title_opt(mut self, t: Option<String>) -> Self {
        self.title = t;
        self
    }
    #[inline]
    #[must_use]
    pub fn subtitle(mut self, s: impl Into<String>) -> Self {
        self.subtitle = Some(s.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn x_range(mut self, lo: f64, hi: f64) -> Self {
        self.x_range = Some((lo, hi));
        self
    }
    #[inline]
    #[must_use]
    pub fn width_factor(mut self, v: f64) -> Self {
        self.width_factor = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn color<C: Into<AnsiCode>>(mut self, c: C) -> Self {
        self.color = Some(c.into());
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let (low, high) = self.x_range.ok_or(ConfigError::MissingField("x_range"))?;
        if low.is_nan() || high.is_nan() || low > high {
            return Err(ConfigError::InvalidRange { low, high });
        }
        Ok(Config {
            title: self.title,
            subtitle: self.subtitle,
            x_range: (low, high),
            width_factor: self.width_factor,
            x_chars: self.x_chars,
            y_chars: self.y_chars,
            color: self.color.unwrap_or_else(AnsiCode::industrial_orange),
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ConfigBuilder {
        Config::builder(40, 10).x_range(1.0, 2.0)
    }

    #[test]
    fn defaults() {
        let cfg = base().build().unwrap();
        assert_eq!(cfg.title, None);
        assert_eq!(cfg.width_factor, 1.0);
        assert_eq!(cfg.color, AnsiCode::industrial_orange());
        assert_eq!(cfg.x_span(), 1.0);
    }

    #[test]
    fn missing_range() {
        let err = Config::builder(40, 10).build().unwrap_err();
        assert_eq!(err, ConfigError::MissingField("x_range"));
    }

    #[test]
    fn rejects_nan_bounds() {
        assert!(matches!(
            base().x_range(f64::NAN, 1.0).build(),
            Err(ConfigError::InvalidRange { .. })
        ));
    }

    #[test]
    fn rejects_reversed_range() {
        let err = base().x_range(2.0, 1.0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidRange { low: 2.0, high: 1.0 });
    }

    #[test]
    fn any_width_factor_is_accepted() {
        for w in [0.0, -1.0, 0.25, 40.0] {
            assert_eq!(base().width_factor(w).build().unwrap().width_factor, w);
        }
    }

    #[test]
    fn degenerate_range_is_allowed() {
        let cfg = base().x_range(3.0, 3.0).build().unwrap();
        assert_eq!(cfg.x_span(), 0.0);
    }

    #[test]
    fn builder_converts_into_result() {
        let r: Result<Config, ConfigError> = base().title("t").into();
        assert_eq!(r.unwrap().title.as_deref(), Some("t"));
    }
}
