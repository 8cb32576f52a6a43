//! Results grid of character names

use outing_core::{CharacterRecord, Matcher};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Rows per grid line: name, qualifier, spacer
const CELL_HEIGHT: u16 = 3;

/// Filtered characters laid out in a fixed number of columns. The name part
/// matching the search term is highlighted; the cursor cell is reversed in
/// its category colour.
pub struct CharacterGrid<'a> {
    records: Vec<&'a CharacterRecord>,
    columns: u16,
    cursor: Option<usize>,
    matcher: &'a Matcher,
}

impl<'a> CharacterGrid<'a> {
    pub fn new(records: Vec<&'a CharacterRecord>, columns: u16, matcher: &'a Matcher) -> Self {
        Self {
            records,
            columns: columns.max(1),
            cursor: None,
            matcher,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn height(&self) -> u16 {
        let rows = self.records.len().div_ceil(usize::from(self.columns)) as u16;
        (rows * CELL_HEIGHT).saturating_sub(1)
    }

    fn name_line<'s>(&self, main: &'s str, base: Style) -> Line<'s> {
        let Some(hit) = self.matcher.find(main) else {
            return Line::styled(main, base);
        };

        // `find` reports char positions; slice on the matching byte offsets
        let byte_at = |pos: usize| main.char_indices().nth(pos).map_or(main.len(), |(i, _)| i);
        let (start, end) = (byte_at(hit.start), byte_at(hit.end));
        Line::from(vec![
            Span::styled(&main[..start], base),
            Span::styled(&main[start..end], base.patch(styles::search_match())),
            Span::styled(&main[end..], base),
        ])
    }
}

impl Widget for &CharacterGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cell_width = area.width / self.columns;
        if cell_width < 2 {
            return;
        }

        for (i, record) in self.records.iter().enumerate() {
            let col = (i % usize::from(self.columns)) as u16;
            let row = (i / usize::from(self.columns)) as u16;
            let y = area.y + row * CELL_HEIGHT;
            if y >= area.bottom() {
                break;
            }
            // One column of gutter between cells
            let cell = Rect::new(area.x + col * cell_width, y, cell_width - 1, 2)
                .intersection(area);

            let selected = self.cursor == Some(i);
            let base = if selected {
                styles::cursor(record.category)
            } else {
                styles::text_primary()
            };
            if selected {
                buf.set_style(cell, base);
            }

            let name = record.display_name();
            self.name_line(name.main, base)
                .centered()
                .render(Rect::new(cell.x, cell.y, cell.width, 1), buf);

            if let Some(qualifier) = name.qualifier_label() {
                if cell.height > 1 {
                    let style = if selected { base } else { styles::text_muted() };
                    Line::styled(qualifier, style)
                        .centered()
                        .render(Rect::new(cell.x, cell.y + 1, cell.width, 1), buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use outing_core::{Category, CharacterEntry};
    use ratatui::style::Modifier;

    fn record(name: &str, category: Category) -> CharacterRecord {
        CharacterEntry::new(name).into_record(category)
    }

    #[test]
    fn test_height_counts_rows() {
        let records = [
            record("유리", Category::Human),
            record("카렌", Category::Human),
            record("나인", Category::Beast),
        ];
        let matcher = Matcher::new("");
        let refs: Vec<_> = records.iter().collect();

        assert_eq!(CharacterGrid::new(refs.clone(), 2, &matcher).height(), 5);
        assert_eq!(CharacterGrid::new(refs, 3, &matcher).height(), 2);
    }

    #[test]
    fn test_qualifier_on_second_line() {
        let records = [record("카렌(수영복)", Category::Human)];
        let matcher = Matcher::new("");
        let grid = CharacterGrid::new(records.iter().collect(), 2, &matcher);

        let mut term = TestTerminal::new();
        term.render_widget(&grid, Rect::new(0, 0, 40, grid.height()));

        assert_eq!(term.find_row("카렌"), Some(0));
        assert_eq!(term.find_row("(수영복)"), Some(1));
    }

    #[test]
    fn test_cursor_cell_reversed() {
        let records = [record("유리", Category::Human), record("나인", Category::Beast)];
        let matcher = Matcher::new("");
        let grid = CharacterGrid::new(records.iter().collect(), 2, &matcher).cursor(1);

        let mut term = TestTerminal::new();
        term.render_widget(&grid, Rect::new(0, 0, 40, grid.height()));

        let buffer = term.buffer();
        let first = buffer.cell((1, 0)).expect("cell");
        let second = buffer.cell((21, 0)).expect("cell");
        assert!(!first.modifier.contains(Modifier::REVERSED));
        assert!(second.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_initial_consonant_match_highlighted() {
        let records = [record("메피스토", Category::Undead)];
        let matcher = Matcher::new("ㅍㅅ");
        let grid = CharacterGrid::new(records.iter().collect(), 2, &matcher);
        let line = grid.name_line("메피스토", styles::text_primary());

        let texts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["메", "피스", "토"]);
    }
}
