//! Intro header with the guide title

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use crate::theme::styles;

pub const TITLE: &str = "에버소울 나들이 가이드";

/// Title banner shown until the user starts interacting
pub struct IntroHeader;

impl IntroHeader {
    pub const HEIGHT: u16 = 3;
}

impl Widget for &IntroHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }
        let title_row = Rect::new(area.x, area.y + 1, area.width, 1);
        Line::styled(TITLE, styles::title())
            .centered()
            .render(title_row, buf);
    }
}
