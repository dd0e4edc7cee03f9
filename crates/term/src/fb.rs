//! Framebuffer and style types for terminal rendering.
//!
//! Kana occupy two terminal columns. A wide glyph is stored in its first cell and
//! the second cell holds [`WIDE_CONTINUATION`], which encoders skip.

use unicode_width::UnicodeWidthChar;

/// Marker for the right half of a double-width glyph.
pub const WIDE_CONTINUATION: char = '\0';

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Terminal columns taken by `ch`: 2 for kana and other East Asian wide glyphs.
///
/// Zero-width and control characters count as one column so every glyph owns a cell.
pub fn char_width(ch: char) -> u16 {
    match UnicodeWidthChar::width(ch) {
        Some(2) => 2,
        _ => 1,
    }
}

/// Terminal columns taken by `s`.
pub fn str_width(s: &str) -> u16 {
    s.chars().map(char_width).sum()
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

    /// Resize the framebuffer, keeping the allocation when possible.
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

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Put one glyph; returns the columns it took (0 if it did not fit).
    ///
    /// A wide glyph that would straddle the right edge is replaced by a space.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) -> u16 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        if char_width(ch) == 2 {
            if x + 1 >= self.width {
                self.set(x, y, style.into_cell(' '));
                return 1;
            }
            self.set(x, y, style.into_cell(ch));
            self.set(x + 1, y, style.into_cell(WIDE_CONTINUATION));
            return 2;
        }
        self.set(x, y, style.into_cell(ch));
        1
    }

    /// Put a string left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            cx += self.put_char(cx, y, ch, style);
        }
        cx - x
    }

    /// Put a string centered inside `[x, x + w)`.
    pub fn put_str_centered(&mut self, x: u16, y: u16, w: u16, s: &str, style: CellStyle) {
        let sx = x.saturating_add(w.saturating_sub(str_width(s)) / 2);
        self.put_str(sx, y, s, style);
    }

    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, d) in digits[..len].iter().rev().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, *d as char, style);
        }
        len as u16
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Row `y` as text, dropping wide-glyph continuation cells.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .filter(|&ch| ch != WIDE_CONTINUATION)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_glyph_takes_two_cells() {
        let mut fb = FrameBuffer::new(6, 1);
        let used = fb.put_str(0, 0, "おa", CellStyle::default());
        assert_eq!(used, 3);
        assert_eq!(fb.get(0, 0).unwrap().ch, 'お');
        assert_eq!(fb.get(1, 0).unwrap().ch, WIDE_CONTINUATION);
        assert_eq!(fb.get(2, 0).unwrap().ch, 'a');
        assert_eq!(fb.row_text(0), "おa   ");
    }

    #[test]
    fn wide_glyph_at_edge_is_blanked() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(2, 0, "は", CellStyle::default());
        assert_eq!(fb.get(2, 0).unwrap().ch, ' ');
    }

    #[test]
    fn widths() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width('ア'), 2);
        assert_eq!(char_width('学'), 2);
        assert_eq!(str_width("ohayou"), 6);
        assert_eq!(str_width("おはよう"), 8);
    }

    #[test]
    fn put_u32_writes_digits() {
        let mut fb = FrameBuffer::new(8, 1);
        assert_eq!(fb.put_u32(1, 0, 4096, CellStyle::default()), 4);
        assert_eq!(fb.row_text(0), " 4096   ");
        assert_eq!(fb.put_u32(0, 0, 0, CellStyle::default()), 1);
        assert_eq!(fb.get(0, 0).unwrap().ch, '0');
    }

    #[test]
    fn centered_text() {
        let mut fb = FrameBuffer::new(10, 1);
        fb.put_str_centered(0, 0, 10, "ab", CellStyle::default());
        assert_eq!(fb.get(4, 0).unwrap().ch, 'a');
    }
}
