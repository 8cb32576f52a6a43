//! Search, filter and selection transitions

use outing_core::prelude::*;
use outing_core::{CategoryFilter, CharacterIndex};

use crate::scroll_sync::ScrollSync;
use crate::state::{AppState, ViewState};

use super::UpdateResult;

/// Replace the search term; an unchanged term is a no-op
pub fn handle_set_search_term(state: &mut AppState, term: String) -> UpdateResult {
    if state.view.search_term == term {
        return UpdateResult::none();
    }
    trace!("Search term -> {:?}", term);
    state.view.search_term = term;
    on_query_changed(state);
    UpdateResult::none()
}

/// Replace the category filter; an unchanged filter is a no-op
pub fn handle_set_category(state: &mut AppState, filter: CategoryFilter) -> UpdateResult {
    if state.view.category_filter == filter {
        return UpdateResult::none();
    }
    debug!("Category filter -> {}", filter.label());
    state.view.category_filter = filter;
    on_query_changed(state);
    UpdateResult::none()
}

/// Phase 1 of a selection: write it and wait for a frame drawn with it
pub fn handle_select_character(state: &mut AppState, index: usize) -> UpdateResult {
    if !state.filtered.contains(&index) {
        warn!("Select ignored: index {} is not listed", index);
        return UpdateResult::none();
    }
    let Some(record) = state.index.get(index).cloned() else {
        return UpdateResult::none();
    };

    debug!("Selected {} ({})", record.name, record.category);
    state.view.is_interacting = true;
    state.focus_cursor_on(&record);
    state.view.selected = Some(record);
    request_scroll_sync(state);
    UpdateResult::none()
}

/// Select the record under the results cursor
pub fn handle_select_cursor(state: &mut AppState) -> UpdateResult {
    match state.filtered.get(state.cursor) {
        Some(&index) => handle_select_character(state, index),
        None => UpdateResult::none(),
    }
}

/// Back to the initial view state
pub fn handle_clear_selection(state: &mut AppState) -> UpdateResult {
    debug!("Selection cleared");
    state.view = ViewState::default();
    state.scroll_sync = ScrollSync::Idle;
    state.refilter();
    UpdateResult::none()
}

pub fn handle_focus(state: &mut AppState) -> UpdateResult {
    state.view.is_interacting = true;
    UpdateResult::none()
}

/// Swap the index; a selection that still exists is kept (with fresh data)
pub fn handle_replace_index(state: &mut AppState, index: CharacterIndex) -> UpdateResult {
    info!("Character index replaced: {} records", index.len());
    state.index = index;

    if let Some(selected) = state.view.selected.take() {
        state.view.selected = state
            .index
            .position_of(&selected)
            .and_then(|i| state.index.get(i))
            .cloned();
        if state.view.selected.is_none() {
            state.scroll_sync = ScrollSync::Idle;
        }
    }

    state.refilter();
    if state.auto_select() {
        request_scroll_sync(state);
    }
    UpdateResult::none()
}

pub fn handle_cursor_up(state: &mut AppState) -> UpdateResult {
    let step = state.page.row_step();
    if state.cursor >= step {
        state.cursor -= step;
    }
    UpdateResult::none()
}

pub fn handle_cursor_down(state: &mut AppState) -> UpdateResult {
    let step = state.page.row_step();
    if state.cursor + step < state.filtered.len() {
        state.cursor += step;
    }
    UpdateResult::none()
}

pub fn handle_cursor_left(state: &mut AppState) -> UpdateResult {
    state.cursor = state.cursor.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_cursor_right(state: &mut AppState) -> UpdateResult {
    if state.cursor + 1 < state.filtered.len() {
        state.cursor += 1;
    }
    UpdateResult::none()
}

/// Reaction to a term or filter change
fn on_query_changed(state: &mut AppState) {
    if state.view.selected.take().is_some() {
        state.scroll_sync = ScrollSync::Idle;
    }
    if !state.view.search_term.is_empty() || !state.view.category_filter.is_all() {
        state.view.is_interacting = true;
    }

    state.refilter();
    if state.auto_select() {
        request_scroll_sync(state);
    }
}

/// One-shot request; supersedes any sync already in flight
fn request_scroll_sync(state: &mut AppState) {
    state.scroll_sync = ScrollSync::AwaitingLayout;
}
