//! Settings parser for `config.toml`

use super::types::Settings;
use outing_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "outing-guide";

const DEFAULT_CONFIG: &str = r#"# Outing Guide Configuration

[data]
path = ""                 # Dataset document; empty = bundled dataset

[ui]
wide_breakpoint = 100     # Columns at/above which the search panel is sticky
scroll_top_margin = 1     # Rows left above the card after selecting
smooth_scroll = true
smooth_scroll_step = 2    # Rows per tick
"#;

/// Default config file location: `<config_dir>/outing-guide/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from an explicit file
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the default config file at `config_path` unless one already exists
///
/// Returns `true` when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_custom_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[data]
path = "/srv/outing/preferences.json"

[ui]
wide_breakpoint = 120
scroll_top_margin = 0
smooth_scroll = false
"#,
        )
        .unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(
            settings.data.dataset_path(),
            Some(PathBuf::from("/srv/outing/preferences.json"))
        );
        assert_eq!(settings.ui.wide_breakpoint, 120);
        assert_eq!(settings.ui.scroll_top_margin, 0);
        assert!(!settings.ui.smooth_scroll);
        assert_eq!(settings.ui.smooth_scroll_step, 2);
    }

    #[test]
    fn test_load_invalid_toml_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\nwide_breakpoint = ").unwrap();

        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn test_init_config_file_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(init_config_file(&path).unwrap());
        assert!(path.exists());
        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn test_init_config_file_keeps_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nwide_breakpoint = 80\n").unwrap();

        assert!(!init_config_file(&path).unwrap());
        assert_eq!(load_settings_from(&path).ui.wide_breakpoint, 80);
    }

    #[test]
    fn test_default_config_path_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("outing-guide/config.toml"));
        }
    }
}
