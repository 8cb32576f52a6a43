//! Main render/view function (View in TEA pattern)
//!
//! The page is measured, drawn into an off-screen buffer as tall as the
//! whole page, and the visible slice is copied into the frame. Rendering
//! writes back only what it measured: page bounds, grid columns, and where
//! the detail card landed.


use outing_app::{AppState, LayoutMetrics};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Clear, Widget};
use ratatui::Frame;

use crate::layout::{self, PageLayout, SectionHeights};
use crate::widgets::{
    CharacterCard, CharacterGrid, EmptyResults, Footer, IntroHeader, KeyHints, SearchPanel,
};

/// What the results section shows this frame
enum Results<'a> {
    Card(CharacterCard<'a>),
    Grid(CharacterGrid<'a>),
    Empty,
}

impl Results<'_> {
    fn height(&self) -> u16 {
        match self {
            Results::Card(card) => card.height(),
            Results::Grid(grid) => grid.height(),
            Results::Empty => EmptyResults::HEIGHT,
        }
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        match self {
            Results::Card(card) => card.render(area, buf),
            Results::Grid(grid) => grid.render(area, buf),
            Results::Empty => EmptyResults.render(area, buf),
        }
    }
}

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let [page_area, hints_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    let content = layout::content_columns(area.width);
    let columns = layout::grid_columns(content.width);
    let wide = area.width >= state.settings.ui.wide_breakpoint;
    let matcher = state.view.matcher();

    let (page, canvas, panel) = {
        let panel = SearchPanel::new(&state.view.search_term, state.view.category_filter)
            .focused(state.view.is_interacting);
        let results = match state.selected() {
            Some(record) => Results::Card(CharacterCard::new(record, &state.choices)),
            None if state.filtered.is_empty() => Results::Empty,
            None => Results::Grid(
                CharacterGrid::new(state.filtered_records().collect(), columns, &matcher)
                    .cursor(state.cursor),
            ),
        };
        let footer = Footer::new(state.notice.as_ref());

        let header_height = if state.view.is_interacting {
            0
        } else {
            IntroHeader::HEIGHT
        };
        let page = PageLayout::new(
            area.width,
            SectionHeights {
                header: header_height,
                panel: panel.height(content.width),
                results: results.height(),
                footer: footer.height(),
            },
        );

        let mut canvas = Buffer::empty(Rect::new(0, 0, area.width, page.total));
        if page.header.height > 0 {
            IntroHeader.render(page.header, &mut canvas);
        }
        panel.render(page.panel, &mut canvas);
        results.render(page.results, &mut canvas);
        footer.render(page.footer, &mut canvas);

        (page, canvas, panel)
    };

    state
        .page
        .set_bounds(page.total, page_area.height, area.width);
    state.page.grid_columns = columns;
    let offset = state.page.offset;

    blit(&canvas, offset, page_area, frame.buffer_mut());

    if page.is_sticky(offset, wide) {
        let pinned = Rect::new(page.panel.x, page_area.y, page.panel.width, page.panel.height)
            .intersection(page_area);
        Clear.render(pinned, frame.buffer_mut());
        panel.render(pinned, frame.buffer_mut());
    }

    state.page.card_metrics = state.view.selected.as_ref().map(|_| LayoutMetrics {
        element_top: i32::from(page.results.y) - i32::from(offset),
        scroll_y: offset,
        sticky_height: page.panel.height,
        viewport_width: area.width,
    });

    KeyHints::new(state.view.selected.is_some(), state.view.is_initial())
        .render(hints_area, frame.buffer_mut());
}

/// Copy the page rows starting at `offset` into `area`
fn blit(canvas: &Buffer, offset: u16, area: Rect, buf: &mut Buffer) {
    for row in 0..area.height {
        let Some(src_y) = offset.checked_add(row) else {
            break;
        };
        if src_y >= canvas.area.height {
            break;
        }
        for col in 0..area.width.min(canvas.area.width) {
            if let (Some(src), Some(dst)) = (
                canvas.cell((col, src_y)),
                buf.cell_mut((area.x + col, area.y + row)),
            ) {
                *dst = src.clone();
            }
        }
    }
}
