use clap::Parser;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "float-bars",
    about = "Display the values an IEEE 754 single-precision float can take within a range",
    long_about = "Display the values an IEEE 754 single-precision float can take within a \
                  range.\n\nThe closer to 0 a range is, the denser the floats get: keep ranges \
                  near 0 small, both for speed and for a readable chart.",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// The lower bound of the provided range
    #[arg(value_name = "rangeMin", value_parser = parse_bound)]
    pub range_min: f64,

    /// The upper bound of the provided range
    #[arg(value_name = "rangeMax", value_parser = parse_bound)]
    pub range_max: f64,

    /// A factor to scale the width of the bars
    #[arg(short, long = "widthFactor", alias = "width-factor", default_value_t = 1.0)]
    pub width_factor: f64,

    /// Do not draw a title
    #[arg(short, long = "noTitle", alias = "no-title")]
    pub no_title: bool,

    /// Custom title for the generated plot
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Bar color (name or `#RRGGBB`)
    #[arg(long, default_value = "industrial")]
    pub color: String,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

/// Rewrite U+2212 MINUS SIGN as ASCII `-`, in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

/// Range bound: any number that is finite in single precision.
pub fn parse_bound(s: &str) -> Result<f64, String> {
    let mut buf = s.trim().as_bytes().to_vec();
    normalize_unicode_minus(&mut buf);
    let v = lexical_core::parse::<f64>(&buf).map_err(|_| format!("invalid number '{s}'"))?;
    if !v.is_finite() || v.abs() > f64::from(f32::MAX) {
        return Err(format!("'{s}' is outside the single-precision range"));
    }
    Ok(v)
}
