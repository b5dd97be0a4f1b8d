//! Row-clear blink animation
//!
//! A presentation-timing state machine, advanced once per animation tick:
//!
//! ```text
//! Idle(0) --rows full--> Blink(1) --> Blink(2) --> Idle(0) + Finished
//! ```
//!
//! The animation keeps a recolored snapshot of the rows being cleared for a
//! renderer to overlay. It never touches the board; when a cycle reports
//! [`AnimationStep::Finished`] the caller compacts the board itself.

use crate::board::Board;
use crate::cell::Cell;
use crate::types::{ColorGroup, BLINK_PALETTE};

/// Number of blink steps before a clear completes.
pub const UNTIL_STEP: u8 = 2;

/// Outcome of one animation tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationStep {
    /// Nothing to clear.
    Idle,
    /// Blinking; `step` is the step just entered.
    Blinking { step: u8 },
    /// The cycle ended; these rows are ready to be removed.
    Finished { rows: Vec<usize> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearAnimation {
    affected_rows: Vec<Vec<Cell>>,
    rows: Vec<usize>,
    step: u8,
    until_step: u8,
    palette: [ColorGroup; 2],
}

impl Default for ClearAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl ClearAnimation {
    pub fn new() -> Self {
        Self {
            affected_rows: Vec::new(),
            rows: Vec::new(),
            step: 0,
            until_step: UNTIL_STEP,
            palette: BLINK_PALETTE,
        }
    }

    /// Recolored snapshot of the rows being cleared; empty while idle.
    pub fn affected_rows(&self) -> &[Vec<Cell>] {
        &self.affected_rows
    }

    /// Board indices of the rows being cleared, top to bottom.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn current_step(&self) -> u8 {
        self.step
    }

    pub fn is_idle(&self) -> bool {
        self.step == 0
    }

    /// Color the snapshot is currently painted with.
    pub fn blink_color(&self) -> Option<ColorGroup> {
        self.affected_rows
            .first()
            .and_then(|row| row.first())
            .map(|c| c.group)
    }

    /// Advance one tick.
    ///
    /// `rows_to_clear` is only consulted while idle; a running cycle finishes
    /// with the rows it started with.
    pub fn step(&mut self, rows_to_clear: &[usize], board: &Board) -> AnimationStep {
        if self.step == 0 {
            if rows_to_clear.is_empty() {
                return AnimationStep::Idle;
            }
            self.snapshot(rows_to_clear, board);
            if self.rows.is_empty() {
                return AnimationStep::Idle;
            }
            self.paint();
            self.step += 1;
            return AnimationStep::Blinking { step: self.step };
        }

        if self.step < self.until_step {
            self.paint();
            self.step += 1;
            return AnimationStep::Blinking { step: self.step };
        }

        self.affected_rows.clear();
        self.step = 0;
        AnimationStep::Finished {
            rows: std::mem::take(&mut self.rows),
        }
    }

    /// Deep-copy the named rows, in board order.
    fn snapshot(&mut self, rows_to_clear: &[usize], board: &Board) {
        self.rows = (0..board.rows())
            .filter(|y| rows_to_clear.contains(y))
            .collect();
        self.affected_rows = self
            .rows
            .iter()
            .map(|&y| board.grid()[y].clone())
            .collect();
    }

    fn paint(&mut self) {
        let color = self.palette[self.step as usize % self.palette.len()];
        for cell in self.affected_rows.iter_mut().flatten() {
            cell.group = color;
        }
    }
}
