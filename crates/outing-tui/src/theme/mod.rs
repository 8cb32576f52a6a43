//! Colours and styles for the guide.
//!
//! - `palette`: raw colour constants
//! - `styles`: semantic style builders

pub mod palette;
pub mod styles;
