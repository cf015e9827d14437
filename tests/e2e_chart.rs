//! End-to-end tests: CLI arguments -> enumeration -> bars -> braille frame.
//!
//! Each test drives the public API the way `float-bars` does, minus the
//! terminal: charts are rendered into a byte buffer instead of stdout.

use clap::Parser;
use float_bars::{
    Config, PlotError, Renderer, chart, cli::Cli, count_between, default_title, floatrange,
    nextf,
};
use pretty_assertions::assert_eq;

// ============================================================================
// Helper: render a chart for [min, max] into plain text lines.
// ============================================================================

fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut in_seq = false;
    for ch in s.chars() {
        match (in_seq, ch) {
            (false, '\x1b') => in_seq = true,
            (true, 'm') => in_seq = false,
            (true, _) => {}
            (false, c) => out.push(c),
        }
    }
    out
}

fn render(min: f64, max: f64, width_factor: f64) -> Vec<String> {
    let cfg = Config::builder(80, 8)
        .title(default_title(min, max))
        .x_range(min, max)
        .width_factor(width_factor)
        .build()
        .unwrap();
    let plot = chart(min, max, &cfg).unwrap();
    let mut out = Vec::new();
    Renderer::new().render_to(&cfg, &plot, &mut out).unwrap();
    strip_ansi(&String::from_utf8(out).unwrap())
        .lines()
        .map(str::to_owned)
        .collect()
}

// ============================================================================
// 1. Stepper + enumerator agree on small, exactly countable ranges
// ============================================================================

#[test]
fn test_three_floats_above_one() {
    let end = nextf(nextf(1.0));
    assert_eq!(floatrange(1.0, end), vec![1.0, nextf(1.0), end]);
}

#[test]
fn test_count_matches_enumeration() {
    for (lo, hi) in [(1.0_f32, 1.0001_f32), (-0.5, -0.499_99), (-1e-44, 1e-44)] {
        assert_eq!(floatrange(lo, hi).len(), count_between(lo, hi));
    }
}

// ============================================================================
// 2. Charts
// ============================================================================

#[test]
fn test_chart_shape() {
    let lines = render(0.75, 1.25, 1.0);
    // 2 top chrome rows, 8 graph rows, tick border, tick labels
    assert_eq!(lines.len(), 12);
    assert!(lines[0].starts_with('┌') && lines[0].ends_with('┐'));
    assert!(lines[0].contains("IEEE 754"));
    for row in &lines[2..10] {
        assert_eq!(row.chars().count(), 82);
        assert!(row.starts_with('│') && row.ends_with('│'));
    }
    assert!(lines[10].starts_with('└') && lines[10].contains('┴'));
    assert!(lines[11].starts_with("0.750"));
}

#[test]
fn test_integer_bar_is_tallest() {
    // 1 ± 2^-7: only 1.0 has a bar tall enough for the top row.
    let lines = render(0.992_187_5, 1.007_812_5, 1.0);
    let top_row: Vec<char> = lines[2].chars().collect();
    let lit: Vec<usize> = top_row
        .iter()
        .enumerate()
        .filter(|(_, c)| **c != '\u{2800}' && **c != '│')
        .map(|(i, _)| i)
        .collect();
    // 1.0 sits on the boundary between dot columns 79 and 80, i.e. cells 39
    // and 40 (+1 for the border)
    assert_eq!(lit, vec![40, 41]);
}

#[test]
fn test_single_value_range() {
    let lines = render(2.0, 2.0, 1.0);
    assert!(lines[0].contains("[2.000000, 2.000000]"));
    let graph: String = lines[2..10].concat();
    assert!(graph.chars().any(|c| c != '\u{2800}' && c != '│'));
}

#[test]
fn test_unrepresentable_bounds_draw_nearest_float() {
    let lines = render(0.1, 0.1, 1.0);
    assert!(lines[0].contains("[0.100000, 0.100000]"));
    let graph: String = lines[2..10].concat();
    assert!(graph.chars().any(|c| c != '\u{2800}' && c != '│'));
}

#[test]
fn test_zero_and_negative_width_factors_still_draw() {
    for w in [0.0, -2.0] {
        let lines = render(1.0, 1.001, w);
        let graph: String = lines[2..10].concat();
        assert!(graph.chars().any(|c| c != '\u{2800}' && c != '│'), "w = {w}");
    }
}

#[test]
fn test_width_factor_widens_bars() {
    let lit = |lines: &[String]| {
        lines[2..10]
            .iter()
            .flat_map(|l| l.chars())
            .filter(|c| *c != '\u{2800}' && *c != '│')
            .count()
    };
    let narrow = render(1.0, f64::from(nextf(nextf(nextf(1.0)))), 0.2);
    let wide = render(1.0, f64::from(nextf(nextf(nextf(1.0)))), 4.0);
    assert!(lit(&wide) > lit(&narrow));
}

// ============================================================================
// 3. Range validation
// ============================================================================

#[test]
fn test_reversed_range_message() {
    let cfg = Config::builder(40, 8).x_range(1.0, 5.0).build().unwrap();
    let err = chart(5.0, 1.0, &cfg).unwrap_err();
    assert!(matches!(err, PlotError::InvalidRange { .. }));
    assert_eq!(
        err.to_string(),
        "The lower bound of the range cannot be greater than the upper bound!"
    );
}

// ============================================================================
// 4. Argument parsing
// ============================================================================

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["float-bars", "1", "2"]).unwrap();
    assert_eq!(cli.range_min, 1.0);
    assert_eq!(cli.range_max, 2.0);
    assert_eq!(cli.width_factor, 1.0);
    assert!(!cli.no_title);
    assert_eq!(cli.title, "");
    assert_eq!(cli.color, "industrial");
}

#[test]
fn test_cli_flags_and_negative_bounds() {
    let cli = Cli::try_parse_from([
        "float-bars",
        "-1.5",
        "−0.5",
        "-w",
        "0.5",
        "-n",
        "--title",
        "halves",
    ])
    .unwrap();
    assert_eq!(cli.range_min, -1.5);
    assert_eq!(cli.range_max, -0.5);
    assert_eq!(cli.width_factor, 0.5);
    assert!(cli.no_title);
    assert_eq!(cli.title, "halves");

    let cli = Cli::try_parse_from(["float-bars", "0", "1", "--widthFactor", "3", "--noTitle"])
        .unwrap();
    assert_eq!(cli.width_factor, 3.0);
    assert!(cli.no_title);
}

#[test]
fn test_cli_rejects_out_of_range_bounds() {
    assert!(Cli::try_parse_from(["float-bars", "0", "1e40"]).is_err());
    assert!(Cli::try_parse_from(["float-bars", "nan", "1"]).is_err());
    assert!(Cli::try_parse_from(["float-bars", "0"]).is_err());
}
