use crate::commands::sort::SortMode;
use crate::error::{HubError, Result};
use crate::layout::MAX_GRID_COLUMNS;
use crate::seed::DEFAULT_VIEWER_ID;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_COLUMNS: usize = 4;

pub const CONFIG_KEYS: [&str; 3] = ["sort", "columns", "viewer"];

/// Configuration for the gallery, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Sort order used when a listing does not ask for one
    #[serde(default)]
    pub sort: SortMode,

    /// Column count for the grid view
    #[serde(default = "default_columns")]
    pub columns: usize,

    /// Id of the user whose likes and uploads "my space" shows
    #[serde(default = "default_viewer")]
    pub viewer: String,
}

fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

fn default_viewer() -> String {
    DEFAULT_VIEWER_ID.to_string()
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            sort: SortMode::default(),
            columns: DEFAULT_COLUMNS,
            viewer: default_viewer(),
        }
    }
}

impl GalleryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HubError::Io)?;
        let config: GalleryConfig =
            serde_json::from_str(&content).map_err(HubError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HubError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HubError::Serialization)?;
        fs::write(config_path, content).map_err(HubError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "sort" => Some(self.sort.to_string()),
            "columns" => Some(self.columns.to_string()),
            "viewer" => Some(self.viewer.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "sort" => {
                self.sort = SortMode::from_str(value)
                    .map_err(|_| format!("Invalid sort '{}': use latest or popular", value))?;
            }
            "columns" => {
                let columns: usize = value
                    .parse()
                    .map_err(|_| format!("Invalid columns '{}': expected a number", value))?;
                if columns == 0 || columns > MAX_GRID_COLUMNS {
                    return Err(format!("columns must be between 1 and {}", MAX_GRID_COLUMNS));
                }
                self.columns = columns;
            }
            "viewer" => {
                let viewer = value.trim();
                if viewer.is_empty() {
                    return Err("viewer cannot be empty".to_string());
                }
                self.viewer = viewer.to_string();
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}
