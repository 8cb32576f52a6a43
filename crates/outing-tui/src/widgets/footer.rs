//! Credits footer and the empty-results line

use outing_app::Notice;
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use crate::theme::styles;

pub const CREDITS: [&str; 2] = [
    "공략 제공: 에버소울 챈/갤 유저들",
    "앱 제작: 에붕소울 (아카라이브 에버소울 채널)",
];

pub const NO_RESULTS: &str = "검색 결과가 없습니다.";

/// Credits, with the latest notice (reload result) above them
pub struct Footer<'a> {
    notice: Option<&'a Notice>,
}

impl<'a> Footer<'a> {
    pub fn new(notice: Option<&'a Notice>) -> Self {
        Self { notice }
    }

    pub fn height(&self) -> u16 {
        CREDITS.len() as u16 + u16::from(self.notice.is_some())
    }
}

impl Widget for &Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::with_capacity(3);
        match self.notice {
            Some(Notice::Info(text)) => {
                lines.push(Line::styled(text.as_str(), styles::text_secondary()))
            }
            Some(Notice::Error(text)) => lines.push(Line::styled(text.as_str(), styles::error())),
            None => {}
        }
        lines.extend(CREDITS.iter().map(|text| Line::styled(*text, styles::text_muted())));

        for (row, line) in lines.into_iter().enumerate() {
            let y = area.y + row as u16;
            if y >= area.bottom() {
                break;
            }
            line.centered().render(Rect::new(area.x, y, area.width, 1), buf);
        }
    }
}

/// Shown instead of the grid when nothing matches
pub struct EmptyResults;

impl EmptyResults {
    pub const HEIGHT: u16 = 2;
}

impl Widget for &EmptyResults {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < EmptyResults::HEIGHT {
            return;
        }
        Line::styled(NO_RESULTS, styles::text_muted())
            .centered()
            .render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_credits_only() {
        let footer = Footer::new(None);
        assert_eq!(footer.height(), 2);

        let mut term = TestTerminal::new();
        term.render_widget(&footer, Rect::new(0, 0, 80, footer.height()));
        assert_eq!(term.find_row(CREDITS[0]), Some(0));
        assert_eq!(term.find_row(CREDITS[1]), Some(1));
    }

    #[test]
    fn test_notice_above_credits() {
        let notice = Notice::Error("데이터 파일을 찾을 수 없습니다".to_string());
        let footer = Footer::new(Some(&notice));
        assert_eq!(footer.height(), 3);

        let mut term = TestTerminal::new();
        term.render_widget(&footer, Rect::new(0, 0, 80, footer.height()));
        assert_eq!(term.find_row("데이터 파일을 찾을 수 없습니다"), Some(0));
        assert_eq!(term.find_row(CREDITS[0]), Some(1));
    }

    #[test]
    fn test_empty_results_line() {
        let mut term = TestTerminal::new();
        term.render_widget(&EmptyResults, Rect::new(0, 0, 80, EmptyResults::HEIGHT));
        assert_eq!(term.find_row(NO_RESULTS), Some(1));
    }
}
