//! Page layout for the TUI
//!
//! The screen is one tall page drawn off-screen and scrolled through the
//! viewport. Sections stack top to bottom: intro header, search panel,
//! results, credits. All rects here are in page coordinates.

use ratatui::layout::Rect;

/// Widest the page content grows; wider terminals get side margins
pub const MAX_CONTENT_WIDTH: u16 = 96;

/// Blank rows between the search panel and the results
pub const RESULTS_GAP: u16 = 1;

/// Blank rows between the results and the credits
pub const FOOTER_GAP: u16 = 2;

/// Narrowest results grid cell, in columns
pub const MIN_CELL_WIDTH: u16 = 16;

/// Measured height of every page section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionHeights {
    pub header: u16,
    pub panel: u16,
    pub results: u16,
    pub footer: u16,
}

/// Section positions within the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub panel: Rect,
    pub results: Rect,
    pub footer: Rect,
    /// Total page height
    pub total: u16,
}

impl PageLayout {
    pub fn new(width: u16, heights: SectionHeights) -> Self {
        let content = content_columns(width);
        let section = |y: u16, height: u16| Rect::new(content.x, y, content.width, height);

        let header = section(0, heights.header);
        let panel = section(header.bottom(), heights.panel);
        let results = section(panel.bottom().saturating_add(RESULTS_GAP), heights.results);
        let footer = section(results.bottom().saturating_add(FOOTER_GAP), heights.footer);

        Self {
            header,
            panel,
            results,
            footer,
            total: footer.bottom(),
        }
    }

    /// The panel pins to the viewport top on wide terminals once the page
    /// has scrolled past its natural position
    pub fn is_sticky(&self, offset: u16, wide: bool) -> bool {
        wide && offset > self.panel.y
    }
}

/// Horizontal extent of the content column (x and width only)
pub fn content_columns(width: u16) -> Rect {
    let content_width = width.min(MAX_CONTENT_WIDTH);
    Rect::new((width - content_width) / 2, 0, content_width, 0)
}

/// Results grid columns for a content width: two to five
pub fn grid_columns(content_width: u16) -> u16 {
    (content_width / MIN_CELL_WIDTH).clamp(2, 5)
}
