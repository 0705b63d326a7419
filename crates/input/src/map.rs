//! Key mapping from terminal events to the symbolic input vocabulary.
//!
//! Translation is phase-aware: during name entry every alphanumeric key is
//! character input, while in the other phases letters double as game
//! controls. The session itself only ever sees [`InputKey`] values.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use slowtris_types::{InputKey, Phase};

/// Map a keyboard event to an input event for the given session phase.
pub fn translate_key(key: KeyEvent, phase: Phase) -> Option<InputKey> {
    if phase == Phase::NameEntry {
        return translate_name_entry(key.code);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(InputKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(InputKey::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(InputKey::Down),

        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('X') => Some(InputKey::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(InputKey::RotateCcw),

        KeyCode::Char(' ') => Some(InputKey::HardDrop),
        KeyCode::Enter => Some(InputKey::Confirm),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(InputKey::ToggleHighscores),
        KeyCode::Backspace => Some(InputKey::Backspace),

        _ => None,
    }
}

fn translate_name_entry(code: KeyCode) -> Option<InputKey> {
    match code {
        KeyCode::Enter => Some(InputKey::Confirm),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Char(c) if c.is_ascii_alphanumeric() => Some(InputKey::Char(c)),
        _ => None,
    }
}

/// Whether the key should quit the program.
///
/// `q` is reserved for name entry, so only Esc and Ctrl-C quit there.
pub fn should_quit(key: KeyEvent, phase: Phase) -> bool {
    if key.code == KeyCode::Esc {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    phase != Phase::NameEntry && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}
