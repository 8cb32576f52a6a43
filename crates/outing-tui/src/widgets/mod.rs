//! Page section widgets
//!
//! Each section widget reports its own height for a given width so the page
//! layout can be measured before anything is drawn.

mod character_card;
mod character_grid;
mod footer;
mod header;
mod key_hints;
mod search_panel;

pub use character_card::CharacterCard;
pub use character_grid::CharacterGrid;
pub use footer::{EmptyResults, Footer, CREDITS, NO_RESULTS};
pub use header::{IntroHeader, TITLE};
pub use key_hints::KeyHints;
pub use search_panel::{SearchPanel, PLACEHOLDER};
