//! Search input and category chips

use outing_core::CategoryFilter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

pub const PLACEHOLDER: &str = "정령 이름 검색 (초성 지원)";

const PROMPT: &str = "› ";
const CHIP_GAP: u16 = 1;

/// The search panel: one input row, a spacer, then wrapped chip rows
pub struct SearchPanel<'a> {
    term: &'a str,
    filter: CategoryFilter,
    focused: bool,
}

impl<'a> SearchPanel<'a> {
    pub fn new(term: &'a str, filter: CategoryFilter) -> Self {
        Self {
            term,
            filter,
            focused: false,
        }
    }

    /// Draw the input cursor and the active border
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn height(&self, width: u16) -> u16 {
        let chip_rows = chip_positions(width.saturating_sub(2))
            .last()
            .map_or(1, |&(_, row, _)| row + 1);
        2 + 1 + 1 + chip_rows
    }

    fn input_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(PROMPT, styles::keybinding())];
        if self.term.is_empty() {
            if self.focused {
                spans.push(Span::styled("▏", styles::keybinding()));
            }
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
        } else {
            spans.push(Span::styled(self.term, styles::text_primary()));
            if self.focused {
                spans.push(Span::styled("▏", styles::keybinding()));
            }
        }
        Line::from(spans)
    }
}

/// Chip label with its padding
fn chip_label(filter: CategoryFilter) -> String {
    format!(" {} ", filter.label())
}

/// (filter, row, column) of every chip, wrapping at `width`
fn chip_positions(width: u16) -> Vec<(CategoryFilter, u16, u16)> {
    let mut positions = Vec::with_capacity(CategoryFilter::CHIPS.len());
    let (mut row, mut col) = (0u16, 0u16);
    for filter in CategoryFilter::CHIPS {
        let chip_width = chip_label(filter).width() as u16;
        if col > 0 && col + chip_width > width {
            row += 1;
            col = 0;
        }
        positions.push((filter, row, col));
        col += chip_width + CHIP_GAP;
    }
    positions
}

impl Widget for &SearchPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        self.input_line()
            .render(Rect::new(inner.x, inner.y, inner.width, 1), buf);

        let chips_top = inner.y + 2;
        for (filter, row, col) in chip_positions(inner.width) {
            let y = chips_top + row;
            if y >= inner.bottom() || col >= inner.width {
                continue;
            }
            let style = styles::chip(filter, filter == self.filter);
            buf.set_stringn(
                inner.x + col,
                y,
                chip_label(filter),
                usize::from(inner.width - col),
                style,
            );
        }
    }
}
