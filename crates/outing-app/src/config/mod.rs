//! Configuration file parsing for Outing Guide
//!
//! Supports `<config_dir>/outing-guide/config.toml` (or an explicit path)
//! for the dataset location and UI tuning.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings_from};
pub use types::*;
