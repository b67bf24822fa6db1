//! Keyboard mapping for the CLI client.
//!
//! Pointer input is resolved in the event loop since it depends on the
//! current layout; this module only covers keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Select the next registered algorithm.
    NextAlgorithm,
    /// Select the previous registered algorithm.
    PrevAlgorithm,
    /// Flip diagonal movement.
    ToggleDiagonal,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('a') | KeyCode::Tab => KeyAction::NextAlgorithm,
            KeyCode::Char('A') | KeyCode::BackTab => KeyAction::PrevAlgorithm,
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::ToggleDiagonal,
            _ => KeyAction::None,
        }
    }
}
