//! Framebuffer → text block serialization.
//!
//! One line per row, rows joined by `\n` with no trailing newline. Continuation
//! cells of wide glyphs are skipped since the glyph already spans them.

use crossterm::style::{style, Color, Stylize};

use crate::fb::{Cell, FrameBuffer};

/// Serialize with each styled cell wrapped in its ANSI 256-color escape.
pub fn encode_text(fb: &FrameBuffer) -> String {
    serialize(fb, |out, cell| match cell.style.fg {
        Some(index) => out.push_str(&style(cell.ch).with(Color::AnsiValue(index)).to_string()),
        None => out.push(cell.ch),
    })
}

/// Serialize characters only, without escapes.
pub fn plain_text(fb: &FrameBuffer) -> String {
    serialize(fb, |out, cell| out.push(cell.ch))
}

fn serialize(fb: &FrameBuffer, mut emit: impl FnMut(&mut String, Cell)) -> String {
    let mut out = String::with_capacity(fb.cells().len() + fb.height() as usize);
    for y in 0..fb.height() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..fb.width() {
            if let Some(cell) = fb.visible(x, y) {
                emit(&mut out, cell);
            }
        }
    }
    out
}
