//! Glyph grid the game view paints into.
//!
//! Rows are stored separately so the renderer can compare a frame row by row
//! against what is already on screen. Writes outside the grid are dropped.

use std::fmt::Write as _;

/// 24-bit color.
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
    Dim,
}

/// Colors and weight of one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ink {
    pub fg: Rgb,
    pub bg: Rgb,
    pub weight: Weight,
}

impl Default for Ink {
    fn default() -> Self {
        Self::PLAIN
    }
}

impl Ink {
    /// Light grey on black.
    pub const PLAIN: Ink = Ink::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));

    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            weight: Weight::Normal,
        }
    }

    pub const fn bold(self) -> Self {
        Self {
            weight: Weight::Bold,
            ..self
        }
    }

    pub const fn dim(self) -> Self {
        Self {
            weight: Weight::Dim,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub ink: Ink,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph {
        ch: ' ',
        ink: Ink::PLAIN,
    };
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    rows: Vec<Vec<Glyph>>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            rows: Vec::new(),
        };
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        // Built only through `resize`, which takes a u16 height.
        self.rows.len() as u16
    }

    /// Change dimensions, keeping existing row allocations.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.rows.resize_with(usize::from(height), Vec::new);
        for row in &mut self.rows {
            row.resize(usize::from(width), Glyph::BLANK);
        }
    }

    /// Rows top to bottom, each exactly `width` glyphs.
    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn row(&self, y: u16) -> Option<&[Glyph]> {
        self.rows.get(usize::from(y)).map(Vec::as_slice)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Glyph> {
        self.row(y)?.get(usize::from(x))
    }

    /// Paint every glyph with `glyph`.
    pub fn clear(&mut self, glyph: Glyph) {
        for row in &mut self.rows {
            row.fill(glyph);
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, ink: Ink) {
        if let Some(slot) = self
            .rows
            .get_mut(usize::from(y))
            .and_then(|row| row.get_mut(usize::from(x)))
        {
            *slot = Glyph { ch, ink };
        }
    }

    /// Write `s` starting at `(x, y)`, cut off at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, ink: Ink) {
        let Some(row) = self.rows.get_mut(usize::from(y)) else {
            return;
        };
        let slots = row.iter_mut().skip(usize::from(x));
        for (slot, ch) in slots.zip(s.chars()) {
            *slot = Glyph { ch, ink };
        }
    }

    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, ink: Ink) {
        self.put_str(x, y, &value.to_string(), ink);
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, ink: Ink) {
        for py in y..y.saturating_add(h) {
            for px in x..x.saturating_add(w) {
                self.put_char(px, py, ch, ink);
            }
        }
    }

    /// Characters of row `y`; empty past the bottom.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|row| row.iter().map(|g| g.ch).collect())
            .unwrap_or_default()
    }

    /// Every row as text, one line each.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for row in self.rows() {
            out.extend(row.iter().map(|g| g.ch));
            let _ = writeln!(out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_written_left_aligned() {
        let mut fb = FrameBuffer::new(8, 1);
        fb.put_u32(1, 0, 4096, Ink::default());
        assert_eq!(fb.row_text(0), " 4096   ");
    }

    #[test]
    fn text_is_cut_at_the_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "SCORE", Ink::default());
        assert_eq!(fb.row_text(0), "  SC");

        fb.put_str(9, 0, "X", Ink::default());
        fb.put_str(0, 3, "X", Ink::default());
        assert!(!fb.text().contains('X'));
    }

    #[test]
    fn resize_pads_with_blanks_and_keeps_content() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.put_char(0, 0, '#', Ink::default().bold());
        fb.resize(3, 2);
        assert_eq!((fb.width(), fb.height()), (3, 2));
        assert_eq!(fb.text(), "#  \n   \n");
        assert_eq!(fb.get(0, 0).map(|g| g.ink.weight), Some(Weight::Bold));
        assert_eq!(fb.get(2, 1), Some(&Glyph::BLANK));
        assert_eq!(fb.get(3, 0), None);
    }

    #[test]
    fn fill_rect_stops_at_the_edges() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.fill_rect(1, 1, 5, 5, '▓', Ink::default());
        assert_eq!(fb.text(), "   \n ▓▓\n");
    }
}
