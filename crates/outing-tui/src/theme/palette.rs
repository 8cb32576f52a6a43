//! Colour palette. Category accents follow the web guide's badge colours.

use outing_core::Category;
use ratatui::style::Color;

// --- Surfaces ---
pub const PAGE_BG: Color = Color::Reset;
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Rgb(2, 132, 199); // sky-600

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Accents ---
pub const TITLE: Color = Color::Rgb(2, 132, 199); // sky-600
pub const LIKED: Color = Color::Rgb(3, 105, 161); // sky-700
pub const DISLIKED: Color = Color::Rgb(185, 28, 28); // red-700
pub const MATCH: Color = Color::Rgb(250, 204, 21); // yellow-400
pub const STATUS_RED: Color = Color::Red;

// --- Categories ---
pub const HUMAN: Color = Color::Rgb(245, 158, 11); // amber-500
pub const BEAST: Color = Color::Rgb(249, 115, 22); // orange-500
pub const FAIRY: Color = Color::Rgb(16, 185, 129); // emerald-500
pub const UNDEAD: Color = Color::Rgb(99, 102, 241); // indigo-500
pub const ANGEL_DEMON: Color = Color::Rgb(217, 70, 239); // fuchsia-500
pub const ALL_CATEGORIES: Color = Color::Rgb(115, 115, 115); // neutral-500

pub fn category(category: Category) -> Color {
    match category {
        Category::Human => HUMAN,
        Category::Beast => BEAST,
        Category::Fairy => FAIRY,
        Category::Undead => UNDEAD,
        Category::AngelDemon => ANGEL_DEMON,
    }
}
