//! Column heights to UTF-8 braille grid, zero intermediate buffers.
//!
//! ### Workflow
//! 1. `preprocess_to_braille` maps each dot column's bar height into a
//!    pixel-space span mirrored about the axis (`PixelSpan`), or nothing
//!    for an empty column.
//! 2. `encode_braille_into_frame` fills a caller-supplied buffer laid out
//!    row-major with exactly three bytes per character cell.  Every braille
//!    scalar U+2800..U+28FF encodes to the fixed pattern
//!    `E2 A0/.. A0+((mask>>6)&3)  80|mask&0x3F`, so we can write bytes
//!    directly without `char::encode_utf8` or any temporary “mask” array.
//!
//! The intersection of a contiguous vertical span with a 4-pixel braille
//! cell is one of 11 canonical patterns (full, top and bottom triplet, top,
//! middle and bottom pair, four single dots, empty).  We pre-compute the
//! bit-mask for each pattern for both the left and right dot column and
//! index into those tables at run-time.

use crate::{
    core::{
        bounds::Axis,
        config::Config,
        constants::{BRAILLE_HORIZONTAL_RESOLUTION as HR, BRAILLE_VERTICAL_RESOLUTION as VR},
    },
    render::raster::Columns,
};

/// Pixel rows covered by one bar, `top <= bottom`, row 0 at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelSpan {
    pub top: usize,
    pub bottom: usize,
}

#[derive(Debug)]
pub struct BraillePlot {
    pub spans: Vec<Option<PixelSpan>>,
}

// --- Pre-Computed Masks ---

/// Pattern enumeration (11 entries):
///
/// 0 empty (⠀), 1 full (⡇), 2 top-three (⠇), 3 bottom-three(⡆), 4 top-two (⠃), 5 middle-two (⠆), 6 bottom-two (⡄),
/// 7 dot-zero (⠁), 8 dot-one (⠂), 9 dot-two (⠄), 10 dot-three (⡀)
const LEFT_MASKS: [u8; 11] = [
    0x00, 0x47, 0x07, 0x46, 0x03, 0x06, 0x44, 0x01, 0x02, 0x04, 0x40,
];
/// Pattern enumeration (11 entries):
///
/// 0 empty (⠀), 1 full (⢸), 2 top-three (⠸), 3 bottom-three(⢰), 4 top-two (⠘), 5 middle-two (⠰), 6 bottom-two (⢠),
/// 7 dot-zero (⠈), 8 dot-one (⠐), 9 dot-two (⠠), 10 dot-three (⢀)
const RIGHT_MASKS: [u8; 11] = [
    0x00, 0xB8, 0x38, 0xB0, 0x18, 0x30, 0xA0, 0x08, 0x10, 0x20, 0x80,
];

/// Map `(low, high)` --- pixel offsets inside a 4-row cell --- to the pattern id.
#[inline]
const fn pattern_id(low: usize, high: usize) -> usize {
    match (low, high) {
        (0, 3) => 1,  // full
        (0, 2) => 2,  // top-3
        (1, 3) => 3,  // bottom-3
        (0, 1) => 4,  // top-2
        (1, 2) => 5,  // middle-2
        (2, 3) => 6,  // bottom-2
        (0, 0) => 7,  // single-0
        (1, 1) => 8,  // single-1
        (2, 2) => 9,  // single-2
        (3, 3) => 10, // single-3
        _ => 0,       // empty / no overlap
    }
}

/// Pattern of `span` inside the cell whose top pixel row is `row_top`.
#[inline]
fn cell_pattern(span: Option<&PixelSpan>, row_top: usize) -> usize {
    let row_bottom = row_top + VR - 1;
    match span {
        Some(s) if s.bottom >= row_top && s.top <= row_bottom => pattern_id(
            s.top.max(row_top) - row_top,
            s.bottom.min(row_bottom) - row_top,
        ),
        _ => 0,
    }
}

/// Scale column heights onto `cfg.y_chars` braille rows.
///
/// The tallest bar touches the top and bottom pixel rows; every bar spans
/// from its height above the axis to the same depth below it.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn preprocess_to_braille(columns: &Columns, config: &Config) -> BraillePlot {
    let (y_min, y_max) = Axis::Y.bounds(0.0, columns.max_height());
    let vert_px = config.y_chars * VR;
    let y_span = y_max - y_min; // > 0 by construction
    let last = vert_px.saturating_sub(1);

    // λ : ℝ → [0,vert_px-1], top row first
    let map = |y: f64| -> usize {
        let r = ((y - y_min) / y_span).clamp(0.0, 1.0) * last as f64;
        last - r.round() as usize
    };

    let spans = columns
        .heights
        .iter()
        .map(|&h| {
            (h > 0.0 && vert_px > 0).then(|| PixelSpan {
                top: map(h),
                bottom: map(-h),
            })
        })
        .collect();

    BraillePlot { spans }
}

/// Encode `plot` straight into `buf`, which is the full frame buffer.
///
/// * `offset` -- byte index of the first braille cell (row 0, col 0)
/// * `row_stride` -- bytes between successive graph rows in `buf`
pub fn encode_braille_into_frame(
    buf: &mut [u8],
    offset: usize,
    row_stride: usize,
    plot: &BraillePlot,
    x_chars: usize,
    y_chars: usize,
) {
    debug_assert!(
        buf.len() >= offset + row_stride * y_chars.saturating_sub(1) + x_chars * 3,
        "frame buffer too small"
    );

    // Iterate row-major for straightforward pointer math.
    for row in 0..y_chars {
        let row_top = row * VR;
        let row_base = offset + row * row_stride;

        for col in 0..x_chars {
            let left_index = col * HR;
            let left = plot.spans.get(left_index).and_then(Option::as_ref);
            let right = plot.spans.get(left_index + 1).and_then(Option::as_ref);
            let left_pattern = cell_pattern(left, row_top);
            let right_pattern = cell_pattern(right, row_top);

            // Combine masks and write three UTF-8 bytes directly.
            // https://en.wikipedia.org/wiki/Braille_Patterns
            let mask = LEFT_MASKS[left_pattern] | RIGHT_MASKS[right_pattern];
            let cell = row_base + col * 3;
            buf[cell] = 0xE2;
            // Bitwise or the second byte with the most significant two bits
            // Represents the nonstandard bottom left and right dots
            buf[cell + 1] = 0xA0 | ((mask >> 6) & 0x03);
            // Bitwise or the third byte with the least significant six bits
            // Represents the normal six dots
            buf[cell + 2] = 0x80 | (mask & 0x3F);
        }
    }
}
