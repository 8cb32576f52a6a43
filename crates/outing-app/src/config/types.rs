//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub data: DataSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Dataset location
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DataSettings {
    /// Dataset document path; empty means the bundled dataset
    #[serde(default)]
    pub path: String,
}

impl DataSettings {
    /// Configured dataset path, if any
    pub fn dataset_path(&self) -> Option<PathBuf> {
        let path = self.path.trim();
        (!path.is_empty()).then(|| PathBuf::from(path))
    }
}

/// Layout and scrolling settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Terminal width (columns) at or above which the search panel is sticky
    #[serde(default = "default_wide_breakpoint")]
    pub wide_breakpoint: u16,

    /// Rows left above the selected card after a scroll sync
    #[serde(default = "default_scroll_top_margin")]
    pub scroll_top_margin: u16,

    /// Animate scroll syncs instead of jumping
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,

    /// Rows moved per tick while animating
    #[serde(default = "default_smooth_scroll_step")]
    pub smooth_scroll_step: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            wide_breakpoint: default_wide_breakpoint(),
            scroll_top_margin: default_scroll_top_margin(),
            smooth_scroll: true,
            smooth_scroll_step: default_smooth_scroll_step(),
        }
    }
}

fn default_wide_breakpoint() -> u16 {
    100
}

fn default_scroll_top_margin() -> u16 {
    1
}

fn default_smooth_scroll_step() -> u16 {
    2
}

fn default_true() -> bool {
    true
}
