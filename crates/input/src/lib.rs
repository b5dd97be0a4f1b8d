//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] intents. The
//! map is fixed; hosts forward the resulting actions to a session as they
//! arrive.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
