//! Page view state - scroll position and viewport bounds of the page.
//!
//! The whole screen is one vertical page (intro, search panel, results,
//! credits). Bounds are written by the TUI during render; the handler layer
//! only moves the offset.

use crate::scroll_sync::LayoutMetrics;

/// State for page scrolling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageViewState {
    /// Current vertical scroll offset from the top of the page
    pub offset: u16,
    /// Total page height in rows (set during render)
    pub total_lines: u16,
    /// Visible rows (set during render)
    pub visible_lines: u16,
    /// Visible width (set during render)
    pub visible_width: u16,
    /// Columns of the results grid in the last frame (set during render)
    pub grid_columns: u16,
    /// Where the detail card sat in the last frame, if one was drawn
    pub card_metrics: Option<LayoutMetrics>,
}

impl PageViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_offset(&self) -> u16 {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Record page and viewport size and keep the offset in bounds
    pub fn set_bounds(&mut self, total_lines: u16, visible_lines: u16, visible_width: u16) {
        self.total_lines = total_lines;
        self.visible_lines = visible_lines;
        self.visible_width = visible_width;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Jump to `offset`, clamped to the page
    pub fn scroll_to(&mut self, offset: u16) {
        self.offset = offset.min(self.max_offset());
    }

    pub fn scroll_up(&mut self, n: u16) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: u16) {
        self.scroll_to(self.offset.saturating_add(n));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Page up, keeping two rows of overlap
    pub fn page_up(&mut self) {
        self.scroll_up(self.page_step());
    }

    /// Page down, keeping two rows of overlap
    pub fn page_down(&mut self) {
        self.scroll_down(self.page_step());
    }

    /// Cursor step for one grid row; 1 before the first frame
    pub fn row_step(&self) -> usize {
        usize::from(self.grid_columns.max(1))
    }

    fn page_step(&self) -> u16 {
        self.visible_lines.saturating_sub(2).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total: u16, visible: u16) -> PageViewState {
        let mut state = PageViewState::new();
        state.set_bounds(total, visible, 80);
        state
    }

    #[test]
    fn test_scroll_down_stops_at_bottom() {
        let mut state = page(50, 20);
        state.scroll_down(100);
        assert_eq!(state.offset, 30);
    }

    #[test]
    fn test_scroll_up_stops_at_top() {
        let mut state = page(50, 20);
        state.scroll_down(5);
        state.scroll_up(10);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_page_moves_by_viewport_minus_overlap() {
        let mut state = page(100, 20);
        state.page_down();
        assert_eq!(state.offset, 18);
        state.page_up();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_top_and_bottom() {
        let mut state = page(100, 20);
        state.scroll_to_bottom();
        assert_eq!(state.offset, 80);
        state.scroll_to_top();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_shrinking_page_clamps_offset() {
        let mut state = page(100, 20);
        state.scroll_to(70);
        state.set_bounds(30, 20, 80);
        assert_eq!(state.offset, 10);
    }

    #[test]
    fn test_page_shorter_than_viewport() {
        let mut state = page(10, 20);
        state.scroll_down(3);
        assert_eq!(state.offset, 0);
        assert_eq!(state.max_offset(), 0);
    }
}
