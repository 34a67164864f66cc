//! Framebuffer and style types for terminal rendering.
//!
//! Wide glyphs (emoji, CJK) occupy a lead cell plus one continuation cell.
//! Overwriting either half blanks the other, so a continuation cell always
//! directly follows its wide lead.

use unicode_width::UnicodeWidthChar;

/// Minimal per-cell styling.
///
/// `fg` is an ANSI 256-color palette index; `None` leaves the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<u8>,
}

impl CellStyle {
    /// Unstyled (terminal default colors).
    pub const fn plain() -> Self {
        Self { fg: None }
    }

    pub const fn fg(index: u8) -> Self {
        Self { fg: Some(index) }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
    /// Display width: 1 for narrow glyphs, 2 for a wide lead, 0 for a continuation.
    pub width: u8,
}

impl Cell {
    pub const fn blank(style: CellStyle) -> Self {
        Self {
            ch: ' ',
            style,
            width: 1,
        }
    }

    pub fn is_continuation(&self) -> bool {
        self.width == 0
    }

    pub fn is_wide(&self) -> bool {
        self.width > 1
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(CellStyle::plain())
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible. Contents are
    /// only meaningful after the next [`FrameBuffer::clear`].
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Cell as a terminal should print it.
    ///
    /// `None` for continuation cells (the terminal advances past them on its
    /// own) and out-of-bounds coordinates. A wide lead cut off by the right
    /// edge prints as a blank.
    pub fn visible(&self, x: u16, y: u16) -> Option<Cell> {
        let cell = self.get(x, y)?;
        if cell.is_continuation() {
            return None;
        }
        if cell.is_wide() && x + 1 >= self.width {
            return Some(Cell::blank(cell.style));
        }
        Some(cell)
    }

    /// Store a cell, blanking the other half of any wide glyph it breaks.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let Some(i) = self.idx(x, y) else {
            return;
        };
        let old = self.cells[i];

        if old.is_continuation() && !cell.is_continuation() && x > 0 {
            let lead = &mut self.cells[i - 1];
            if lead.is_wide() {
                *lead = Cell::blank(lead.style);
            }
        }
        if old.is_wide() && x + 1 < self.width {
            let tail = &mut self.cells[i + 1];
            if tail.is_continuation() {
                *tail = Cell::blank(tail.style);
            }
        }

        self.cells[i] = cell;
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Put a narrow character at an in-bounds position.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style, width: 1 });
    }

    /// Put a glyph at a possibly off-screen position and return the number of
    /// columns it spans.
    ///
    /// The glyph goes in its first column and the rest are blank-filled;
    /// columns outside the buffer are skipped. Characters with no display
    /// width are ignored and return 0.
    pub fn put_glyph(&mut self, x: i32, y: i32, ch: char, style: CellStyle) -> i32 {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0) as i32;
        if w == 0 {
            return 0;
        }
        if y < 0 || y >= i32::from(self.height) {
            return w;
        }
        let lead_visible = x >= 0 && x < i32::from(self.width);

        for i in 0..w {
            let cx = x.saturating_add(i);
            if cx < 0 || cx >= i32::from(self.width) {
                continue;
            }
            let cell = if i == 0 {
                Cell {
                    ch,
                    style,
                    width: w as u8,
                }
            } else if lead_visible {
                Cell {
                    ch: ' ',
                    style,
                    width: 0,
                }
            } else {
                Cell::blank(style)
            };
            self.set(cx as u16, y as u16, cell);
        }
        w
    }

    /// Put a string starting at a possibly off-screen position, clipping to the
    /// buffer. Returns the total display width consumed.
    ///
    /// Column arithmetic saturates, so any `x` is accepted.
    pub fn put_str(&mut self, x: i32, y: i32, s: &str, style: CellStyle) -> i32 {
        let mut offset = 0;
        for ch in s.chars() {
            offset += self.put_glyph(x.saturating_add(offset), y, ch, style);
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .filter_map(|x| fb.visible(x, y))
            .map(|c| c.ch)
            .collect()
    }

    #[test]
    fn new_buffer_is_blank_and_unstyled() {
        let fb = FrameBuffer::new(3, 2);
        assert_eq!(fb.cells().len(), 6);
        assert!(fb.cells().iter().all(|c| *c == Cell::default()));
        assert_eq!(Cell::default().style, CellStyle::plain());
    }

    #[test]
    fn put_str_clips_left_and_right() {
        let mut fb = FrameBuffer::new(4, 1);
        let style = CellStyle::fg(3);
        assert_eq!(fb.put_str(-2, 0, "abcdef", style), 6);
        assert_eq!(row(&fb, 0), "cdef");

        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "xyz", style);
        assert_eq!(row(&fb, 0), "  xy");
    }

    #[test]
    fn put_str_outside_rows_is_ignored() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_str(0, -1, "ab", CellStyle::fg(1));
        fb.put_str(0, 2, "ab", CellStyle::fg(1));
        assert!(fb.cells().iter().all(|c| *c == Cell::default()));
    }

    #[test]
    fn wide_glyph_fills_continuation() {
        let mut fb = FrameBuffer::new(5, 1);
        let style = CellStyle::fg(9);
        assert_eq!(fb.put_str(0, 0, "🏃x", style), 3);

        let lead = fb.get(0, 0).unwrap();
        assert_eq!(lead.ch, '🏃');
        assert_eq!(lead.width, 2);
        assert!(fb.get(1, 0).unwrap().is_continuation());
        assert_eq!(fb.get(1, 0).unwrap().style, style);
        assert_eq!(fb.get(2, 0).unwrap().ch, 'x');
        assert_eq!(row(&fb, 0), "🏃x  ");
    }

    #[test]
    fn wide_glyph_clipped_on_left_leaves_blank() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(-1, 0, "🏃a", CellStyle::fg(2));
        let c = fb.get(0, 0).unwrap();
        assert_eq!(c.ch, ' ');
        assert_eq!(c.width, 1);
        assert_eq!(fb.get(1, 0).unwrap().ch, 'a');
    }

    #[test]
    fn wide_glyph_clipped_on_right_prints_blank() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(2, 0, "🏃", CellStyle::fg(2));
        assert_eq!(fb.get(2, 0).unwrap().ch, '🏃');
        assert_eq!(fb.visible(2, 0).unwrap().ch, ' ');
    }

    #[test]
    fn overwriting_half_of_wide_glyph_blanks_other_half() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "🏃", CellStyle::fg(1));
        fb.put_char(1, 0, 'z', CellStyle::fg(2));
        assert_eq!(fb.get(0, 0).unwrap(), Cell::blank(CellStyle::fg(1)));
        assert_eq!(fb.get(1, 0).unwrap().ch, 'z');

        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(1, 0, "🏃", CellStyle::fg(1));
        fb.put_char(1, 0, 'z', CellStyle::fg(2));
        assert_eq!(fb.get(2, 0).unwrap(), Cell::blank(CellStyle::fg(1)));
        assert_eq!(row(&fb, 0), " z  ");
    }

    #[test]
    fn zero_width_chars_do_not_advance() {
        let mut fb = FrameBuffer::new(3, 1);
        assert_eq!(fb.put_str(0, 0, "a\u{301}b", CellStyle::plain()), 2);
        assert_eq!(row(&fb, 0), "ab ");
    }

    #[test]
    fn put_str_at_extreme_columns_is_clipped() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(i32::MAX, 0, "🏃abc", CellStyle::fg(1));
        fb.put_str(i32::MAX - 1, 0, "xyz", CellStyle::fg(1));
        fb.put_str(i32::MIN, 0, "🏃abc", CellStyle::fg(1));
        assert!(fb.cells().iter().all(|c| *c == Cell::default()));
    }

    #[test]
    fn resize_changes_dimensions() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(5, 3);
        assert_eq!((fb.width(), fb.height()), (5, 3));
        assert_eq!(fb.cells().len(), 15);
        assert!(fb.get(4, 2).is_some());
        assert!(fb.get(5, 2).is_none());
    }
}
