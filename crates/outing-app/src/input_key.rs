//! Abstract input key event, independent of terminal library.
//!
//! Keeps `outing-app` free of crossterm so the state machine can be driven by
//! the headless runner and by tests without a terminal.

/// Abstract input key event.
/// Converted from `crossterm::event::KeyEvent` at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key, including Hangul jamo and syllables
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}
