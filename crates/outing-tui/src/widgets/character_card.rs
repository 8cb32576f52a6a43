//! Detail card for the selected character

use outing_core::{CharacterRecord, ChoiceTable, ResolvedChoice, ResolvedGroup, Tier};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::theme::styles;

pub const SOURCE_LABEL: &str = "출처: ";
pub const CLOSE_HINT: &str = "Esc 닫기";

const LIKED_MARK: &str = "❤️ ";
const DISLIKED_MARK: &str = "💛 ";
const MARK_WIDTH: u16 = 3;

/// Title, optional source link, and one block per present preference tier
pub struct CharacterCard<'a> {
    record: &'a CharacterRecord,
    tiers: Vec<(Tier, ResolvedGroup<'a>)>,
}

impl<'a> CharacterCard<'a> {
    pub fn new(record: &'a CharacterRecord, choices: &'a ChoiceTable) -> Self {
        let tiers = record
            .preferences
            .tiers()
            .map(|(tier, group)| (tier, choices.resolve_group(group)))
            .collect();
        Self { record, tiers }
    }

    pub fn height(&self) -> u16 {
        let header = 1 + u16::from(self.record.source_url.is_some()) + 1;
        let tiers: u16 = self.tiers.iter().map(|(_, group)| tier_height(group)).sum();
        2 + header + tiers
    }

    fn title_line(&self) -> Line<'a> {
        let accent = styles::category_accent(self.record.category);
        let name = self.record.display_name();
        let mut spans = vec![Span::styled(name.main, accent.add_modifier(Modifier::BOLD))];
        if let Some(qualifier) = name.qualifier_label() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(qualifier, accent));
        }
        spans.push(Span::styled(
            format!("  {}", self.record.category),
            styles::text_muted(),
        ));
        Line::from(spans)
    }
}

fn tier_height(group: &ResolvedGroup<'_>) -> u16 {
    let rows = group.liked.len().max(1) + group.disliked.len().max(1);
    2 + rows as u16
}

fn choice_line<'a>(choice: &ResolvedChoice<'a>, style: Style) -> Line<'a> {
    let mut spans = Vec::with_capacity(2);
    if let Some(location) = choice.location {
        spans.push(Span::styled(format!("{location}  "), styles::text_muted()));
    }
    spans.push(Span::styled(choice.text, style));
    Line::from(spans)
}

/// Marker column plus one row per choice; an empty list keeps its marker row
fn render_choices(
    choices: &[ResolvedChoice<'_>],
    mark: &str,
    style: Style,
    area: Rect,
    buf: &mut Buffer,
) -> u16 {
    let rows = choices.len().max(1) as u16;
    for row in 0..rows.min(area.height) {
        let y = area.y + row;
        if row == 0 {
            buf.set_stringn(area.x, y, mark, usize::from(area.width), Style::default());
        }
        if let Some(choice) = choices.get(usize::from(row)) {
            let text_area = Rect::new(
                area.x + MARK_WIDTH,
                y,
                area.width.saturating_sub(MARK_WIDTH),
                1,
            );
            choice_line(choice, style).render(text_area, buf);
        }
    }
    rows
}

fn render_tier(tier: Tier, group: &ResolvedGroup<'_>, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::text_muted())
        .title(Span::styled(
            format!(" {} ", tier.title()),
            styles::text_secondary().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    block.render(area, buf);

    let inner = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(1), inner.height);
    let used = render_choices(&group.liked, LIKED_MARK, styles::liked(), inner, buf);
    let rest = Rect::new(
        inner.x,
        inner.y + used,
        inner.width,
        inner.height.saturating_sub(used),
    );
    render_choices(&group.disliked, DISLIKED_MARK, styles::disliked(), rest, buf);
}

impl Widget for &CharacterCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(styles::category_accent(self.record.category));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 4 || inner.height == 0 {
            return;
        }
        let inner = Rect::new(inner.x + 1, inner.y, inner.width - 2, inner.height);

        let mut y = inner.y;
        self.title_line()
            .render(Rect::new(inner.x, y, inner.width, 1), buf);
        Line::styled(CLOSE_HINT, styles::text_muted())
            .right_aligned()
            .render(Rect::new(inner.x, y, inner.width, 1), buf);
        y += 1;

        if let Some(url) = &self.record.source_url {
            let link = styles::text_secondary().add_modifier(Modifier::UNDERLINED);
            Line::from(vec![
                Span::styled(SOURCE_LABEL, styles::text_muted()),
                Span::styled(url.as_str(), link),
            ])
            .render(Rect::new(inner.x, y, inner.width, 1), buf);
            y += 1;
        }
        y += 1;

        for (tier, group) in &self.tiers {
            let height = tier_height(group);
            if y >= inner.bottom() {
                break;
            }
            let tier_area = Rect::new(inner.x, y, inner.width, height).intersection(inner);
            render_tier(*tier, group, tier_area, buf);
            y += height;
        }
    }
}
