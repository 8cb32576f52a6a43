//! Scroll synchronization after a selection.
//!
//! Selecting a character collapses the intro header, which moves everything
//! below it. The scroll target can only be measured once a frame has been
//! drawn with the collapsed header, so syncing runs in two phases:
//!
//! 1. The selection handler writes the selection and enters
//!    [`ScrollSync::AwaitingLayout`].
//! 2. After the next draw the view reports [`LayoutMetrics`] through
//!    `Message::LayoutSettled`; only then is the target computed and the
//!    scroll (instant or animated) started.

use crate::config::UiSettings;

/// Position of the selected card, measured from a drawn frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutMetrics {
    /// Card top relative to the top of the viewport (negative when above it)
    pub element_top: i32,
    /// Page scroll offset the frame was drawn with
    pub scroll_y: u16,
    /// Height of the pinned search panel while it is sticky
    pub sticky_height: u16,
    /// Viewport width in columns
    pub viewport_width: u16,
}

/// Progress of the current scroll sync request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollSync {
    #[default]
    Idle,
    /// Selection written; waiting for a frame drawn with it
    AwaitingLayout,
    /// Moving toward `to` a few rows per tick
    Animating { to: u16 },
}

impl ScrollSync {
    pub fn is_idle(self) -> bool {
        self == ScrollSync::Idle
    }

    pub fn is_awaiting_layout(self) -> bool {
        self == ScrollSync::AwaitingLayout
    }
}

/// Page offset that puts the card just below the sticky panel (wide
/// viewports) or the top margin (narrow viewports). Never negative.
pub fn target_offset(metrics: &LayoutMetrics, ui: &UiSettings) -> u16 {
    let reserved = if metrics.viewport_width >= ui.wide_breakpoint {
        i32::from(metrics.sticky_height) + i32::from(ui.scroll_top_margin)
    } else {
        i32::from(ui.scroll_top_margin)
    };

    let target = metrics.element_top + i32::from(metrics.scroll_y) - reserved;
    target.clamp(0, i32::from(u16::MAX)) as u16
}

/// One animation step from `current` toward `target`
pub fn step_toward(current: u16, target: u16, step: u16) -> u16 {
    let step = step.max(1);
    if current < target {
        current.saturating_add(step).min(target)
    } else {
        current.saturating_sub(step).max(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(element_top: i32, scroll_y: u16, width: u16) -> LayoutMetrics {
        LayoutMetrics {
            element_top,
            scroll_y,
            sticky_height: 4,
            viewport_width: width,
        }
    }

    #[test]
    fn test_target_on_wide_viewport_skips_sticky_panel() {
        let ui = UiSettings::default();
        // 10 + 5 - (4 + 1)
        assert_eq!(target_offset(&metrics(10, 5, 120), &ui), 10);
    }

    #[test]
    fn test_target_on_narrow_viewport_ignores_sticky_panel() {
        let ui = UiSettings::default();
        // 10 + 5 - 1
        assert_eq!(target_offset(&metrics(10, 5, 80), &ui), 14);
    }

    #[test]
    fn test_breakpoint_is_inclusive() {
        let ui = UiSettings::default();
        assert_eq!(target_offset(&metrics(10, 0, 100), &ui), 5);
        assert_eq!(target_offset(&metrics(10, 0, 99), &ui), 9);
    }

    #[test]
    fn test_target_clamps_at_zero() {
        let ui = UiSettings::default();
        assert_eq!(target_offset(&metrics(2, 0, 120), &ui), 0);
        assert_eq!(target_offset(&metrics(-30, 10, 80), &ui), 0);
    }

    #[test]
    fn test_target_for_card_above_viewport() {
        let ui = UiSettings::default();
        // Card scrolled out above the viewport: -3 + 20 - 1
        assert_eq!(target_offset(&metrics(-3, 20, 80), &ui), 16);
    }

    #[test]
    fn test_step_toward() {
        assert_eq!(step_toward(0, 5, 2), 2);
        assert_eq!(step_toward(4, 5, 2), 5);
        assert_eq!(step_toward(9, 5, 2), 7);
        assert_eq!(step_toward(6, 5, 2), 5);
        assert_eq!(step_toward(5, 5, 2), 5);
        // Zero step still makes progress
        assert_eq!(step_toward(0, 5, 0), 1);
    }

    #[test]
    fn test_sync_state_predicates() {
        assert!(ScrollSync::default().is_idle());
        assert!(ScrollSync::AwaitingLayout.is_awaiting_layout());
        assert!(!ScrollSync::Animating { to: 3 }.is_idle());
    }
}
