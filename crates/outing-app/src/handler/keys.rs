//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on current state
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('r') => Some(Message::ReloadDataset),

        // Search input
        InputKey::Char('/') if state.view.search_term.is_empty() => Some(Message::Focus),
        InputKey::Char(c) => {
            let mut term = state.view.search_term.clone();
            term.push(c);
            Some(Message::SetSearchTerm(term))
        }
        InputKey::Backspace => {
            let mut term = state.view.search_term.clone();
            term.pop()?;
            Some(Message::SetSearchTerm(term))
        }
        InputKey::CharCtrl('u') => Some(Message::SetSearchTerm(String::new())),

        // Category chips
        InputKey::Tab => Some(Message::SetCategory(state.view.category_filter.next())),
        InputKey::BackTab => Some(Message::SetCategory(state.view.category_filter.prev())),

        // Results list, or the page while a card is shown
        InputKey::Up if state.selected().is_some() => Some(Message::ScrollUp),
        InputKey::Down if state.selected().is_some() => Some(Message::ScrollDown),
        InputKey::Up => Some(Message::CursorUp),
        InputKey::Down => Some(Message::CursorDown),
        InputKey::Left | InputKey::Right if state.selected().is_some() => None,
        InputKey::Left => Some(Message::CursorLeft),
        InputKey::Right => Some(Message::CursorRight),
        InputKey::Enter if state.selected().is_none() => Some(Message::SelectCursor),
        InputKey::Enter => None,

        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End => Some(Message::ScrollToBottom),

        InputKey::Esc if state.view.is_initial() => Some(Message::Quit),
        InputKey::Esc => Some(Message::ClearSelection),

        InputKey::CharCtrl(_) => None,
    }
}
