//! Scroll message handlers
//!
//! Handles manual page scrolling and the second phase of a scroll sync.

use outing_core::prelude::*;

use crate::scroll_sync::{step_toward, target_offset, LayoutMetrics, ScrollSync};
use crate::state::AppState;

use super::UpdateResult;

/// Handle scroll up message
pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.page.scroll_up(1);
    UpdateResult::none()
}

/// Handle scroll down message
pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.page.scroll_down(1);
    UpdateResult::none()
}

/// Handle scroll to top message
pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.page.scroll_to_top();
    UpdateResult::none()
}

/// Handle scroll to bottom message
pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.page.scroll_to_bottom();
    UpdateResult::none()
}

/// Handle page up message
pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.page.page_up();
    UpdateResult::none()
}

/// Handle page down message
pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.page.page_down();
    UpdateResult::none()
}

/// Phase 2 of a selection: the frame with the collapsed intro is on screen,
/// so the card position is final.
pub fn handle_layout_settled(state: &mut AppState, metrics: LayoutMetrics) -> UpdateResult {
    if !state.scroll_sync.is_awaiting_layout() {
        trace!("Stale layout report ignored");
        return UpdateResult::none();
    }

    let target = target_offset(&metrics, &state.settings.ui).min(state.page.max_offset());
    debug!(
        "Scroll sync: card at {} (offset {}), target {}",
        metrics.element_top, metrics.scroll_y, target
    );

    if state.settings.ui.smooth_scroll && state.page.offset != target {
        state.scroll_sync = ScrollSync::Animating { to: target };
    } else {
        state.page.scroll_to(target);
        state.scroll_sync = ScrollSync::Idle;
    }
    UpdateResult::none()
}

/// Advance a running scroll animation by one step
pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    if let ScrollSync::Animating { to } = state.scroll_sync {
        let next = step_toward(state.page.offset, to, state.settings.ui.smooth_scroll_step);
        state.page.scroll_to(next);
        if state.page.offset == to || state.page.offset != next {
            // Reached the target, or the page got shorter than the target
            state.scroll_sync = ScrollSync::Idle;
        }
    }
    UpdateResult::none()
}

/// Manual scrolling takes over from an animation in flight
pub fn cancel_animation(state: &mut AppState) {
    if matches!(state.scroll_sync, ScrollSync::Animating { .. }) {
        state.scroll_sync = ScrollSync::Idle;
    }
}
