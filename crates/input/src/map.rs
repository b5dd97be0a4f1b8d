//! Key mapping from terminal events to game actions.
//!
//! | Keys | Action |
//! |------|--------|
//! | Left / h / a | move left |
//! | Right / l / d | move right |
//! | Down / j / s | move down (commits on contact) |
//! | PageUp / u | move up |
//! | Up / k / w / x | rotate clockwise |
//! | z / y | rotate counter-clockwise |
//! | Space | hard drop |
//! | q / Ctrl-C | quit |

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    // Release events (kitty protocol) would double every action.
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
            Some(GameAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            Some(GameAction::Move(Direction::Right))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
            Some(GameAction::Move(Direction::Down))
        }
        KeyCode::PageUp | KeyCode::Char('u') => Some(GameAction::Move(Direction::Up)),

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::Char('x') => {
            Some(GameAction::RotateCw)
        }
        KeyCode::Char('z') | KeyCode::Char('y') => Some(GameAction::RotateCcw),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
