//! Terminal output.
//!
//! Each frame is encoded into a byte buffer and written with a single call.
//! A frame drawn over nothing (first frame, new size, or after
//! [`TerminalRenderer::invalidate`]) clears the screen and paints every row;
//! otherwise only the spans of each row that differ from the frame on screen
//! are rewritten.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Ink, Rgb, Weight};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// Prints glyphs, switching ink only when it changes.
struct Pen<'a> {
    out: &'a mut Vec<u8>,
    ink: Option<Ink>,
}

impl<'a> Pen<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, ink: None }
    }

    fn print_at(&mut self, x: u16, y: u16, glyphs: &[Glyph]) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for glyph in glyphs {
            if self.ink != Some(glyph.ink) {
                self.switch_ink(glyph.ink)?;
            }
            self.out.queue(Print(glyph.ch))?;
        }
        Ok(())
    }

    fn switch_ink(&mut self, ink: Ink) -> io::Result<()> {
        // SGR reset also drops colors, so it must come before them.
        self.out.queue(SetAttribute(Attribute::Reset))?;
        match ink.weight {
            Weight::Normal => {}
            Weight::Bold => {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            Weight::Dim => {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        self.out.queue(SetForegroundColor(ink.fg.into()))?;
        self.out.queue(SetBackgroundColor(ink.bg.into()))?;
        self.ink = Some(ink);
        Ok(())
    }

    fn finish(self) -> io::Result<()> {
        if self.ink.is_some() {
            self.out.queue(SetAttribute(Attribute::Reset))?;
            self.out.queue(ResetColor)?;
        }
        Ok(())
    }
}

/// Column spans where `after` differs from `before`, left to right.
fn changed_spans<'a>(
    before: &'a [Glyph],
    after: &'a [Glyph],
) -> impl Iterator<Item = Range<u16>> + 'a {
    // Rows come from a framebuffer, so their length fits in u16.
    let width = after.len() as u16;
    let differs = move |x: &u16| before.get(usize::from(*x)) != after.get(usize::from(*x));
    let mut from = 0;
    std::iter::from_fn(move || {
        let start = (from..width).find(differs)?;
        let end = (start..width).find(|x| !differs(x)).unwrap_or(width);
        from = end;
        Some(start..end)
    })
}

/// Encode `next` as it should be drawn over `shown`.
///
/// `shown` is what the terminal currently displays; `None`, or a frame of a
/// different size, means the screen is cleared and `next` painted in full.
pub fn encode_frame(
    shown: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let same_size = |s: &&FrameBuffer| s.width() == next.width() && s.height() == next.height();
    let mut pen = Pen::new(out);

    match shown.filter(same_size) {
        Some(shown) => {
            for (y, (before, after)) in (0..).zip(shown.rows().zip(next.rows())) {
                for span in changed_spans(before, after) {
                    let glyphs = &after[usize::from(span.start)..usize::from(span.end)];
                    pen.print_at(span.start, y, glyphs)?;
                }
            }
        }
        None => {
            pen.out.queue(terminal::Clear(ClearType::All))?;
            for (y, row) in (0..).zip(next.rows()) {
                pen.print_at(0, y, row)?;
            }
        }
    }

    pen.finish()?;
    Ok(())
}

/// Owns the terminal while a game is running.
///
/// Output goes to stdout by default; any writer works for drawing, which is
/// how the encoder is exercised without a terminal.
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    shown: Option<FrameBuffer>,
    bytes: Vec<u8>,
    active: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            shown: None,
            bytes: Vec::new(),
            active: false,
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.bytes.clear();
        self.bytes.queue(terminal::EnterAlternateScreen)?;
        self.bytes.queue(terminal::DisableLineWrap)?;
        self.bytes.queue(cursor::Hide)?;
        self.write_bytes()?;
        self.shown = None;
        Ok(())
    }

    /// Restore the terminal. Does nothing unless [`enter`](Self::enter) ran.
    pub fn exit(&mut self) -> Result<()> {
        if !std::mem::replace(&mut self.active, false) {
            return Ok(());
        }
        self.bytes.clear();
        self.bytes.queue(SetAttribute(Attribute::Reset))?;
        self.bytes.queue(ResetColor)?;
        self.bytes.queue(cursor::Show)?;
        self.bytes.queue(terminal::EnableLineWrap)?;
        self.bytes.queue(terminal::LeaveAlternateScreen)?;
        self.write_bytes()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget what is on screen; the next frame repaints everything.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    pub fn draw(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.bytes.clear();
        encode_frame(self.shown.as_ref(), frame, &mut self.bytes)?;
        self.write_bytes()?;
        self.shown = Some(frame.clone());
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    fn write_bytes(&mut self) -> io::Result<()> {
        self.out.write_all(&self.bytes)?;
        self.out.flush()
    }
}
