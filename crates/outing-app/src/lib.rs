//! outing-app - View state and update loop for Outing Guide
//!
//! This crate implements the TEA (The Elm Architecture) pattern: [`AppState`]
//! is the model, [`Message`] the events, [`handler::update`] the pure
//! transition function. It has no terminal dependency; the TUI and the
//! headless runner both drive it through [`process`].

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod page_view_state;
pub mod process;
pub mod scroll_sync;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use scroll_sync::{LayoutMetrics, ScrollSync};
pub use state::{AppState, Notice, ViewState};
