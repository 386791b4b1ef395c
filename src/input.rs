//! Translates crossterm key events into [`GameInput`]s.
//!
//! Jump needs explicit press and release edges. Terminals that support the
//! keyboard enhancement protocol report releases directly; on the rest, held
//! keys arrive as a stream of repeated presses, so a release is synthesised
//! once the stream goes quiet. Before the first repeat the OS keeps quiet for
//! its initial repeat delay, so that window is [`JUMP_HOLD_TIMEOUT_MS`];
//! after it, [`JUMP_RELEASE_TIMEOUT_MS`].

use crate::core::constants::{JUMP_HOLD_TIMEOUT_MS, JUMP_RELEASE_TIMEOUT_MS};
use crate::core::screen::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Role of a physical key in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Jump,
    Confirm,
    Quit,
}

/// Space and Up jump, Enter confirms, Esc quits.
pub fn key_role(code: KeyCode) -> Option<KeyRole> {
    match code {
        KeyCode::Char(' ') | KeyCode::Up => Some(KeyRole::Jump),
        KeyCode::Enter => Some(KeyRole::Confirm),
        KeyCode::Esc => Some(KeyRole::Quit),
        _ => None,
    }
}

/// Ctrl+C, which raw mode delivers as an ordinary key.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// Stateful key translator. Timestamps are milliseconds on any monotonic clock.
#[derive(Debug, Clone)]
pub struct InputTranslator {
    /// Terminal reports release events.
    release_events: bool,
    jump_down: bool,
    /// Auto-repeat has started for the current hold.
    repeating: bool,
    last_jump_ms: u64,
}

impl InputTranslator {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            jump_down: false,
            repeating: false,
            last_jump_ms: 0,
        }
    }

    /// Translate one key event.
    pub fn translate(&mut self, key: KeyEvent, now_ms: u64) -> Option<GameInput> {
        let role = key_role(key.code)?;

        match (role, key.kind) {
            (KeyRole::Jump, KeyEventKind::Release) => {
                self.jump_down = false;
                self.repeating = false;
                Some(GameInput::JumpReleased)
            }
            (KeyRole::Jump, _) => {
                self.last_jump_ms = now_ms;
                if self.jump_down {
                    // Auto-repeat while held
                    self.repeating = true;
                    None
                } else {
                    self.jump_down = true;
                    self.repeating = false;
                    Some(GameInput::JumpPressed)
                }
            }
            (_, KeyEventKind::Release | KeyEventKind::Repeat) => None,
            (KeyRole::Confirm, KeyEventKind::Press) => Some(GameInput::Confirm),
            (KeyRole::Quit, KeyEventKind::Press) => Some(GameInput::Quit),
        }
    }

    /// Synthesised release for terminals without release events.
    pub fn poll_release(&mut self, now_ms: u64) -> Option<GameInput> {
        if self.release_events || !self.jump_down {
            return None;
        }
        let timeout = if self.repeating {
            JUMP_RELEASE_TIMEOUT_MS
        } else {
            JUMP_HOLD_TIMEOUT_MS
        };
        if now_ms.saturating_sub(self.last_jump_ms) >= timeout {
            self.jump_down = false;
            self.repeating = false;
            return Some(GameInput::JumpReleased);
        }
        None
    }
}
