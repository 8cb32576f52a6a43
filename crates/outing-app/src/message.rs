//! Message types for the application (TEA pattern)

use outing_core::{CategoryFilter, CharacterIndex, Dataset};

use crate::input_key::InputKey;
use crate::scroll_sync::LayoutMetrics;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (drives scroll animation)
    Tick,

    /// Quit immediately (Esc at the initial state, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // View State Transitions
    // ─────────────────────────────────────────────────────────
    /// Replace the search term
    SetSearchTerm(String),
    /// Replace the category filter
    SetCategory(CategoryFilter),
    /// Select the record at this position of the character index
    SelectCharacter(usize),
    /// Reset to the initial view state
    ClearSelection,
    /// Text pasted into the search input
    Paste(String),
    /// Search input gained focus
    Focus,
    /// Swap in a rebuilt character index
    ReplaceIndex(CharacterIndex),
    /// A frame was drawn after a selection; carries the card position
    LayoutSettled(LayoutMetrics),

    // ─────────────────────────────────────────────────────────
    // Results Cursor
    // ─────────────────────────────────────────────────────────
    /// Move the cursor one grid row up
    CursorUp,
    /// Move the cursor one grid row down
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Select the record under the cursor
    SelectCursor,

    // ─────────────────────────────────────────────────────────
    // Page Scroll
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Dataset
    // ─────────────────────────────────────────────────────────
    /// Re-read the dataset document from disk
    ReloadDataset,
    /// Background load finished
    DatasetLoaded(Box<Dataset>),
    /// Background load failed; the current data stays in place
    DatasetLoadFailed { message: String },
}
