//! Session configuration
//!
//! Everything a session needs to know up front. Dimensions are fixed for the
//! lifetime of a session.

use thiserror::Error;

use crate::board::ClearRule;
use crate::rng::PieceRule;
use crate::types::{
    ANIMATION_TICK_MS, DEFAULT_COLS, DEFAULT_ROWS, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS,
    PIECE_PALETTE,
};

/// Rejected configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least {min} columns wide, got {got}")]
    TooNarrow { min: usize, got: usize },
    #[error("board must be at least {min} rows tall, got {got}")]
    TooShort { min: usize, got: usize },
    #[error("board must be at most {max} columns wide, got {got}")]
    TooWide { max: usize, got: usize },
    #[error("board must be at most {max} rows tall, got {got}")]
    TooTall { max: usize, got: usize },
    #[error("color count must be between 1 and {max}, got {got}")]
    ColorCount { max: usize, got: usize },
    #[error("animation interval must be greater than zero")]
    ZeroInterval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub cols: usize,
    pub rows: usize,
    pub seed: u32,
    pub piece_rule: PieceRule,
    pub clear_rule: ClearRule,
    /// How many entries of the piece palette are in play.
    pub color_count: usize,
    pub animation_interval_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS as usize,
            rows: DEFAULT_ROWS as usize,
            seed: 1,
            piece_rule: PieceRule::default(),
            clear_rule: ClearRule::default(),
            color_count: PIECE_PALETTE.len(),
            animation_interval_ms: ANIMATION_TICK_MS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols < MIN_COLS as usize {
            return Err(ConfigError::TooNarrow {
                min: MIN_COLS as usize,
                got: self.cols,
            });
        }
        if self.rows < MIN_ROWS as usize {
            return Err(ConfigError::TooShort {
                min: MIN_ROWS as usize,
                got: self.rows,
            });
        }
        if self.cols > usize::from(MAX_COLS) {
            return Err(ConfigError::TooWide {
                max: usize::from(MAX_COLS),
                got: self.cols,
            });
        }
        if self.rows > usize::from(MAX_ROWS) {
            return Err(ConfigError::TooTall {
                max: usize::from(MAX_ROWS),
                got: self.rows,
            });
        }
        if !(1..=PIECE_PALETTE.len()).contains(&self.color_count) {
            return Err(ConfigError::ColorCount {
                max: PIECE_PALETTE.len(),
                got: self.color_count,
            });
        }
        if self.animation_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}
