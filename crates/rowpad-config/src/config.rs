/// Editor configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rowpad_mod_history::HistoryConfig;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "ROWPAD_CONFIG";

const CONFIG_FILE_NAME: &str = "rowpad.json";
const MAX_TAB_WIDTH: usize = 16;

/// Top-level editor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Spaces inserted by the Tab key (1 to 16).
    pub tab_width: usize,
    /// Undo items kept before the oldest are dropped.
    pub max_undo_depth: usize,
    /// Whether saved files end with a line terminator.
    pub trailing_newline: bool,
    /// Text columns of the headless screen.
    pub screen_width: usize,
    /// Text rows of the headless screen.
    pub screen_height: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: 4,
            max_undo_depth: HistoryConfig::default().max_depth,
            trailing_newline: true,
            screen_width: 80,
            screen_height: 24,
        }
    }
}

impl EditorConfig {
    /// Returns the config file path.
    ///
    /// Resolution order:
    /// 1. `ROWPAD_CONFIG` environment variable
    /// 2. `<config dir>/rowpad/rowpad.json`
    /// 3. `rowpad.json` in the working directory
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .map(|d| d.join("rowpad").join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<EditorConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Broken files are left for the user to fix.
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e:#}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON, creating missing
    /// parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write config: {}", path.display()))
    }

    /// Clamps values to valid ranges.
    pub fn sanitize(&mut self) {
        self.tab_width = self.tab_width.clamp(1, MAX_TAB_WIDTH);
        self.max_undo_depth = self.max_undo_depth.max(1);
        self.screen_width = self.screen_width.max(1);
        self.screen_height = self.screen_height.max(1);
    }

    /// Undo history settings derived from this config.
    pub fn history_config(&self) -> HistoryConfig {
        HistoryConfig::with_max_depth(self.max_undo_depth)
    }
}
