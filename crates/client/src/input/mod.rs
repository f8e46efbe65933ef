//! Input processing for the terminal client.
//!
//! This module owns the translation from `crossterm` events to the
//! platform-independent [`Key`] the parser understands, including the
//! player's remap table. The rules engine never sees raw terminal events.

use std::collections::BTreeMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::Key;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Forward the key to the session.
    Forward(Key),
    /// No meaningful key was produced.
    None,
}

/// Translates `KeyEvent`s into game keys using a configurable key map.
#[derive(Debug, Default)]
pub struct InputHandler {
    key_map: BTreeMap<char, char>,
}

impl InputHandler {
    pub fn new(key_map: BTreeMap<char, char>) -> Self {
        Self { key_map }
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Char(ch) => KeyAction::Forward(Key::Char(self.remap(ch))),
            KeyCode::Enter => KeyAction::Forward(Key::Enter),
            KeyCode::Backspace => KeyAction::Forward(Key::Backspace),
            KeyCode::Esc => KeyAction::Forward(Key::Escape),
            _ => KeyAction::None,
        }
    }

    fn remap(&self, ch: char) -> char {
        self.key_map.get(&ch).copied().unwrap_or(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn forwards_editor_keys() {
        let handler = InputHandler::default();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('j'))),
            KeyAction::Forward(Key::Char('j'))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('$'))),
            KeyAction::Forward(Key::Char('$'))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc)),
            KeyAction::Forward(Key::Escape)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter)),
            KeyAction::Forward(Key::Enter)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace)),
            KeyAction::Forward(Key::Backspace)
        );
    }

    #[test]
    fn plain_q_is_a_game_key() {
        let handler = InputHandler::default();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q'))),
            KeyAction::Forward(Key::Char('q'))
        );
    }

    #[test]
    fn control_chords_quit() {
        let handler = InputHandler::default();
        assert_eq!(handler.handle_key(ctrl('c')), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl('q')), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl('x')), KeyAction::None);
    }

    #[test]
    fn remap_applies_before_forwarding() {
        let handler = InputHandler::new(BTreeMap::from([('a', 'h'), ('s', 'j')]));
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('a'))),
            KeyAction::Forward(Key::Char('h'))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('l'))),
            KeyAction::Forward(Key::Char('l'))
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::default();
        assert_eq!(handler.handle_key(key(KeyCode::Left)), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::F(1))), KeyAction::None);
    }
}
