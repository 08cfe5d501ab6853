//! Input handling for the render loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action resulting from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// No action.
    None,
}

/// Maps key events to actions. The renderer only understands quitting;
/// everything else is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Handles a key event and returns the corresponding action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> Action {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            match event.code {
                KeyCode::Char('c') | KeyCode::Char('q') => return Action::Quit,
                _ => {}
            }
        }

        match event.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}
