//! Semantic style builders.

use outing_core::{Category, CategoryFilter};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TITLE)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::TITLE)
}

pub fn liked() -> Style {
    Style::default().fg(palette::LIKED)
}

pub fn disliked() -> Style {
    Style::default().fg(palette::DISLIKED)
}

pub fn search_match() -> Style {
    Style::default()
        .fg(palette::MATCH)
        .add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn category_accent(category: Category) -> Style {
    Style::default().fg(palette::category(category))
}

/// Chip style; the active chip is drawn in its category colour, reversed
pub fn chip(filter: CategoryFilter, active: bool) -> Style {
    let color = match filter {
        CategoryFilter::All => palette::ALL_CATEGORIES,
        CategoryFilter::Only(category) => palette::category(category),
    };
    if active {
        Style::default()
            .fg(color)
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().fg(palette::TEXT_SECONDARY)
    }
}

/// Highlight for the grid cell under the cursor
pub fn cursor(category: Category) -> Style {
    Style::default()
        .fg(palette::category(category))
        .add_modifier(Modifier::REVERSED)
}

/// Rounded panel block
pub fn panel_block(focused: bool) -> Block<'static> {
    let border = if focused {
        palette::BORDER_ACTIVE
    } else {
        palette::BORDER_DIM
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}
