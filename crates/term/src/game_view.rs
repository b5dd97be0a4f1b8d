//! GameView: maps a [`Session`] read model into a terminal framebuffer.
//!
//! This module is pure (no I/O). It reads the board grid, the falling piece,
//! its ghost, the clear-animation snapshot, the next piece, and the score
//! line, and paints them. It never mutates the session.

use crate::core::{Cell, Piece, Session};
use crate::fb::{FrameBuffer, Glyph, Ink, Rgb};
use crate::types::ColorGroup;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const BORDER: Ink = Ink::new(Rgb::new(200, 200, 200), PANEL_BG);
const WELL: Ink = Ink::new(Rgb::new(80, 80, 90), PLAY_BG);
const EMPTY_DOT: Ink = Ink::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
const GHOST: Ink = Ink::new(Rgb::new(140, 140, 140), PLAY_BG).dim();
const LABEL: Ink = Ink::PLAIN.bold();
const VALUE: Ink = Ink::new(Rgb::new(200, 200, 200), PANEL_BG);
const BANNER: Ink = Ink::new(Rgb::new(255, 255, 255), PANEL_BG).bold();

/// Fill color for a color group.
pub fn group_rgb(group: ColorGroup) -> Rgb {
    match group {
        ColorGroup::Empty => PLAY_BG,
        ColorGroup::Red => Rgb::new(220, 80, 80),
        ColorGroup::Green => Rgb::new(100, 220, 120),
        ColorGroup::Blue => Rgb::new(80, 120, 220),
        ColorGroup::Orange => Rgb::new(255, 165, 0),
        ColorGroup::Black => Rgb::new(10, 10, 10),
    }
}

/// Where the board frame landed inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal view of a session.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    show_ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            show_ghost: true,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_ghost(mut self, show_ghost: bool) -> Self {
        self.show_ghost = show_ghost;
        self
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers keep one framebuffer across frames; it is resized only when the
    /// viewport changes.
    pub fn render_into(&self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::BLANK);

        let board = session.board();
        let cols = u16::try_from(board.cols()).unwrap_or(u16::MAX);
        let rows = u16::try_from(board.rows()).unwrap_or(u16::MAX);
        let board_px_w = cols.saturating_mul(self.cell_w);
        let board_px_h = rows.saturating_mul(self.cell_h);
        let frame_w = board_px_w.saturating_add(2);
        let frame_h = board_px_h.saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        fb.fill_rect(frame.x + 1, frame.y + 1, board_px_w, board_px_h, ' ', WELL);
        self.draw_border(fb, frame);

        // Committed stack.
        for cell in board.grid().iter().flatten() {
            if cell.is_empty() {
                self.draw_empty_cell(fb, frame, cell.x, cell.y);
            } else {
                self.draw_cell(fb, frame, cell, '█');
            }
        }

        // Rows being cleared blink over the stack.
        for cell in session.clear_animation().affected_rows().iter().flatten() {
            self.draw_cell(fb, frame, cell, '▓');
        }

        if !session.is_game_over() {
            if self.show_ghost {
                self.draw_ghost(fb, frame, &session.ghost(), session.current_piece());
            }
            for cell in session.current_piece().cells() {
                self.draw_cell(fb, frame, cell, '█');
            }
        }

        self.draw_side_panel(fb, session, viewport, frame);

        if session.is_game_over() {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i16, y: i16) {
        self.fill_board_cell(fb, frame, x, y, '·', EMPTY_DOT);
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, frame: Frame, cell: &Cell, ch: char) {
        let ink = Ink::new(group_rgb(cell.group), PLAY_BG).bold();
        self.fill_board_cell(fb, frame, cell.x, cell.y, ch, ink);
    }

    /// Landing preview; cells the falling piece already covers are left to it.
    fn draw_ghost(&self, fb: &mut FrameBuffer, frame: Frame, ghost: &Piece, current: &Piece) {
        for cell in ghost.cells().iter().filter(|c| !current.occupies(c.x, c.y)) {
            self.fill_board_cell(fb, frame, cell.x, cell.y, '░', GHOST);
        }
    }

    /// Paint one board cell; cells above the grid are skipped.
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: i16,
        cell_y: i16,
        ch: char,
        ink: Ink,
    ) {
        let (Ok(cx), Ok(cy)) = (u16::try_from(cell_x), u16::try_from(cell_y)) else {
            return;
        };
        let inner_w = frame.w.saturating_sub(2) / self.cell_w.max(1);
        let inner_h = frame.h.saturating_sub(2) / self.cell_h.max(1);
        if cx >= inner_w || cy >= inner_h {
            return;
        }
        let px = frame.x + 1 + cx * self.cell_w;
        let py = frame.y + 1 + cy * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, ink);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let mut y = frame.y;
        for (name, v) in [
            ("SCORE", session.score()),
            ("LEVEL", session.level()),
            ("SPEED", session.speed()),
            ("LINES", session.lines()),
        ] {
            fb.put_str(panel_x, y, name, LABEL);
            fb.put_u32(panel_x, y.saturating_add(1), v, VALUE);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", LABEL);
        y = y.saturating_add(1);
        let next = session.next_piece();
        for cell in next.cells() {
            let ink = Ink::new(group_rgb(cell.group), PANEL_BG);
            let (Ok(cx), Ok(cy)) = (u16::try_from(cell.x), u16::try_from(cell.y)) else {
                continue;
            };
            let px = panel_x.saturating_add(cx.saturating_mul(2));
            fb.fill_rect(px, y.saturating_add(cy), 2, 1, '█', ink);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, BANNER);
    }
}
