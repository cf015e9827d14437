//! Single-frame braille bar chart renderer with:
//! - a reusable graph buffer, braille bytes written in place
//! - chrome (title border, tick border, tick labels, subtitle) built as text
//!
//! Layout, top to bottom:
//!
//! ```text
//! ┌──── title ────┐
//! │               │
//! │⡇⡇  ⡇ ... ⡇   │   y_chars graph rows
//! └┴───┴───┴────┴─┘   tick marks
//!  1.0 1.1 1.2 ...    tick labels
//!     subtitle
//! ```

use std::io::{Write, stdout};

use crate::{
    core::{
        bounds::{tick_decimals, tick_label, ticks},
        color::{AnsiCode, colorize},
        config::Config,
        constants::{
            BORDER_WIDTH, BRAILLE_HORIZONTAL_RESOLUTION as HR, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH,
            TICK_COUNT,
        },
        error::PlotError,
    },
    render::{
        braille::{BraillePlot, encode_braille_into_frame},
        raster::ColumnScale,
    },
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";
const TICK: &str = "┴";

const V_B: &[u8] = V.as_bytes();
const RESET_SEQ: &[u8] = b"\x1b[0m";

// --- Helpers ---

/// Write centred colored text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize, color: &AnsiCode) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  "); // 2-char left padding
    buf.push_str(&colorize(color, text));
    buf.push(' '); // 1-char right padding
    buf.push_str(&H.repeat(pad_right));
}

/// Character column (inside the border) of every tick, with its label.
fn tick_marks(cfg: &Config) -> Vec<(usize, String)> {
    let (low, high) = cfg.x_range;
    #[allow(clippy::cast_precision_loss)]
    let decimals = tick_decimals(cfg.x_span() / TICK_COUNT as f64);
    let scale = ColumnScale::new(cfg);
    ticks(low, high)
        .into_iter()
        .map(|t| (scale.column(t) / HR, tick_label(t, decimals)))
        .collect()
}

/// Bottom border carrying a `┴` under every tick.
fn tick_border(marks: &[(usize, String)], x_chars: usize) -> String {
    let mut line = String::with_capacity((x_chars + BORDER_WIDTH) * 3 + 1);
    line.push_str(BL);
    for c in 0..x_chars {
        line.push_str(if marks.iter().any(|(m, _)| *m == c) {
            TICK
        } else {
            H
        });
    }
    line.push_str(BR);
    line.push('\n');
    line
}

/// Labels centred under their ticks; a label that would collide with the
/// previous one is dropped.
fn tick_labels(marks: &[(usize, String)], x_chars: usize) -> String {
    let width = x_chars + BORDER_WIDTH;
    let mut line = String::with_capacity(width + 1);
    for (col, label) in marks {
        let len = label.len();
        if len > width {
            continue;
        }
        // +1 for the left border
        let start = (col + 1).saturating_sub(len / 2).min(width - len);
        let used = line.len();
        if used > 0 && start <= used {
            continue;
        }
        line.push_str(&" ".repeat(start - used));
        line.push_str(label);
    }
    line.push('\n');
    line
}

pub struct Renderer {
    // reusable buffer for graph rows
    graph_buf: Vec<u8>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph_buf: Vec::new(),
        }
    }

    fn chrome_top(cfg: &Config) -> String {
        let inner = cfg.x_chars;
        let mut top = String::new();
        top.push_str(TL);
        match &cfg.title {
            Some(t) => push_centered(&mut top, t, inner, &cfg.color),
            None => top.push_str(&H.repeat(inner)),
        }
        top.push_str(TR);
        top.push('\n');

        top.push_str(V);
        top.push_str(&" ".repeat(inner));
        top.push_str(V);
        top.push('\n');
        top
    }

    fn chrome_bottom(cfg: &Config) -> String {
        let marks = tick_marks(cfg);
        let mut bot = tick_border(&marks, cfg.x_chars);
        bot.push_str(&tick_labels(&marks, cfg.x_chars));
        if let Some(sub) = &cfg.subtitle {
            let width = cfg.x_chars + BORDER_WIDTH;
            let len = sub.chars().count();
            bot.push_str(&" ".repeat(width.saturating_sub(len) / 2));
            bot.push_str(sub);
            bot.push('\n');
        }
        bot
    }

    /// Build the whole graph area (all rows) directly into `self.graph_buf`.
    fn fill_graph_rows(&mut self, cfg: &Config, plot: &BraillePlot) -> Result<(), PlotError> {
        if cfg.x_chars < MIN_GRAPH_WIDTH || cfg.y_chars < MIN_GRAPH_HEIGHT {
            return Err(PlotError::GraphTooSmall {
                want_w: MIN_GRAPH_WIDTH,
                want_h: MIN_GRAPH_HEIGHT,
                got_w: cfg.x_chars,
                got_h: cfg.y_chars,
            });
        }

        // Per-row byte layout
        let color_seq = cfg.color.as_str();
        let braille_bytes = cfg.x_chars * 3; // 3 bytes per glyph
        let fixed_prefix_bytes = V_B.len() + color_seq.len();
        let fixed_suffix_bytes = RESET_SEQ.len() + V_B.len(); // reset + right border

        let row_bytes = fixed_prefix_bytes + braille_bytes + fixed_suffix_bytes; // (no '\n')

        let stride = row_bytes + 1; // include '\n'
        let total = stride * cfg.y_chars;
        self.graph_buf.resize(total, 0);

        for r in 0..cfg.y_chars {
            let base = r * stride;

            // Left border + color
            self.graph_buf[base..base + V_B.len()].copy_from_slice(V_B);
            let col_start = base + V_B.len();
            self.graph_buf[col_start..col_start + color_seq.len()]
                .copy_from_slice(color_seq.as_bytes());

            // Reset + right border
            let reset_start = base + fixed_prefix_bytes + braille_bytes;
            self.graph_buf[reset_start..reset_start + RESET_SEQ.len()].copy_from_slice(RESET_SEQ);
            self.graph_buf
                [reset_start + RESET_SEQ.len()..reset_start + RESET_SEQ.len() + V_B.len()]
                .copy_from_slice(V_B);

            // Newline
            self.graph_buf[base + row_bytes] = b'\n';
        }

        // Braille payload
        encode_braille_into_frame(
            &mut self.graph_buf,
            fixed_prefix_bytes,
            stride,
            plot,
            cfg.x_chars,
            cfg.y_chars,
        );

        Ok(())
    }

    /// The complete chart as UTF-8 bytes, one `\n`-terminated line per row.
    pub fn frame(&mut self, config: &Config, plot: &BraillePlot) -> Result<Vec<u8>, PlotError> {
        self.fill_graph_rows(config, plot)?;
        let top = Self::chrome_top(config);
        let bot = Self::chrome_bottom(config);

        let mut out = Vec::with_capacity(top.len() + self.graph_buf.len() + bot.len());
        out.extend_from_slice(top.as_bytes());
        out.extend_from_slice(&self.graph_buf);
        out.extend_from_slice(bot.as_bytes());
        Ok(out)
    }

    /// Write the chart to `out`.
    pub fn render_to<W: Write>(
        &mut self,
        config: &Config,
        plot: &BraillePlot,
        out: &mut W,
    ) -> Result<(), PlotError> {
        let frame = self.frame(config, plot)?;
        out.write_all(&frame)?;
        out.flush()?;
        Ok(())
    }

    /// Main render entry: the chart on stdout.
    pub fn render(&mut self, config: &Config, plot: &BraillePlot) -> Result<(), PlotError> {
        let mut term = stdout().lock();
        self.render_to(config, plot, &mut term)
    }
}
