//! outing-tui - Terminal UI for Outing Guide
//!
//! This crate provides the ratatui-based interface: event polling, page
//! layout, widgets, and the runner that drives the `outing-app` state machine.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
