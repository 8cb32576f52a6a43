//! Main update function - handles state transitions (TEA pattern)

use outing_core::prelude::*;

use crate::message::Message;
use crate::state::{AppState, Notice};

use super::{keys::handle_key, scroll, view, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => scroll::handle_tick(state),

        // ─────────────────────────────────────────────────────────
        // View State Transitions
        // ─────────────────────────────────────────────────────────
        Message::SetSearchTerm(term) => view::handle_set_search_term(state, term),
        Message::SetCategory(filter) => view::handle_set_category(state, filter),
        Message::SelectCharacter(index) => view::handle_select_character(state, index),
        Message::ClearSelection => view::handle_clear_selection(state),
        Message::Paste(text) => {
            let term = format!("{}{}", state.view.search_term, text);
            view::handle_set_search_term(state, term)
        }
        Message::Focus => view::handle_focus(state),
        Message::ReplaceIndex(index) => view::handle_replace_index(state, index),
        Message::LayoutSettled(metrics) => scroll::handle_layout_settled(state, metrics),

        // ─────────────────────────────────────────────────────────
        // Results Cursor
        // ─────────────────────────────────────────────────────────
        Message::CursorUp => view::handle_cursor_up(state),
        Message::CursorDown => view::handle_cursor_down(state),
        Message::CursorLeft => view::handle_cursor_left(state),
        Message::CursorRight => view::handle_cursor_right(state),
        Message::SelectCursor => view::handle_select_cursor(state),

        // ─────────────────────────────────────────────────────────
        // Page Scroll
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            scroll::cancel_animation(state);
            scroll::handle_scroll_up(state)
        }
        Message::ScrollDown => {
            scroll::cancel_animation(state);
            scroll::handle_scroll_down(state)
        }
        Message::PageUp => {
            scroll::cancel_animation(state);
            scroll::handle_page_up(state)
        }
        Message::PageDown => {
            scroll::cancel_animation(state);
            scroll::handle_page_down(state)
        }
        Message::ScrollToTop => {
            scroll::cancel_animation(state);
            scroll::handle_scroll_to_top(state)
        }
        Message::ScrollToBottom => {
            scroll::cancel_animation(state);
            scroll::handle_scroll_to_bottom(state)
        }

        // ─────────────────────────────────────────────────────────
        // Dataset
        // ─────────────────────────────────────────────────────────
        Message::ReloadDataset => {
            info!("Reloading dataset");
            state.notice = Some(Notice::Info("데이터 불러오는 중...".to_string()));
            UpdateResult::action(UpdateAction::LoadDataset {
                path: state.dataset_path.clone(),
            })
        }

        Message::DatasetLoaded(dataset) => {
            let dataset = *dataset;
            state.notice = Some(Notice::Info(format!(
                "{}명의 정령을 불러왔습니다.",
                dataset.report.characters
            )));
            let index = dataset.index();
            state.choices = dataset.choices;
            UpdateResult::message(Message::ReplaceIndex(index))
        }

        Message::DatasetLoadFailed { message } => {
            warn!("Dataset reload failed: {}", message);
            state.notice = Some(Notice::Error(message));
            UpdateResult::none()
        }
    }
}
