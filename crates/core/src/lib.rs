//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management, and simulation logic.
//! It has no dependencies on UI or I/O:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is reachable without a terminal
//! - **Portable**: runs in any host (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`cell`]: a coordinate plus a color group
//! - [`piece`]: tetromino cells, translation and pivot rotation
//! - [`blueprint`]: character-grid blueprints and the piece generator
//! - [`rng`]: seeded LCG and piece-kind randomizers
//! - [`kicks`]: per-kind kick offset tables
//! - [`board`]: committed grid, collision queries, full rows and compaction
//! - [`animation`]: blink state machine for rows being cleared
//! - [`scoring`]: line-clear rewards, level and gravity speed
//! - [`schedule`]: debounced tick cadences
//! - [`config`]: session configuration and validation
//! - [`session`]: the game session tying it all together
//!
//! # Game Rules
//!
//! - **Same-color rows**: by default a row clears only when every cell shares
//!   one color; [`ClearRule::AnyColor`] switches to the classic rule
//! - **Kicks**: rotations try a short list of offsets before giving up
//! - **Blinking clears**: full rows blink before they are removed and scored
//! - **Scoring**: 40 / 100 / 300 / 1200 for 1-4 rows, level every 100 points
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Session, SessionConfig};
//! use blockfall_types::{Direction, GameAction};
//!
//! let mut session = Session::new(SessionConfig::default()).unwrap();
//!
//! session.apply_action(GameAction::Move(Direction::Left));
//! session.apply_action(GameAction::RotateCw);
//! assert!(session.apply_action(GameAction::HardDrop));
//!
//! assert_eq!(session.board().occupied_count(), 4);
//! assert_eq!(session.score(), 0);
//! ```
//!
//! # Timing
//!
//! Hosts call [`Session::advance`] with milliseconds since the session
//! started. Gravity runs every [`scoring::drop_interval_ms`] for the current
//! speed; the clear animation runs on its own faster cadence.

pub mod animation;
pub mod blueprint;
pub mod board;
pub mod cell;
pub mod config;
pub mod kicks;
pub mod piece;
pub mod rng;
pub mod schedule;
pub mod scoring;
pub mod session;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use animation::{AnimationStep, ClearAnimation};
pub use blueprint::{build_piece, PieceGenerator};
pub use board::{Board, ClearRule, FixtureError};
pub use cell::Cell;
pub use config::{ConfigError, SessionConfig};
pub use piece::Piece;
pub use rng::{PieceRule, SimpleRng};
pub use schedule::Cadence;
pub use scoring::Score;
pub use session::{Advance, Session};
