//! Bottom row of key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Key hints for the current screen
pub struct KeyHints {
    card_open: bool,
    initial: bool,
}

impl KeyHints {
    pub fn new(card_open: bool, initial: bool) -> Self {
        Self { card_open, initial }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.card_open {
            vec![
                ("Esc", "닫기"),
                ("↑↓", "스크롤"),
                ("PgUp/PgDn", "페이지"),
                ("Ctrl+C", "종료"),
            ]
        } else {
            vec![
                ("Tab", "분류"),
                ("←↑↓→", "이동"),
                ("Enter", "선택"),
                ("Esc", if self.initial { "종료" } else { "초기화" }),
                ("Ctrl+R", "새로고침"),
            ]
        }
    }
}

impl Widget for &KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (key, label)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {label}"), styles::text_muted()));
        }
        Line::from(spans).centered().render(area, buf);
    }
}
