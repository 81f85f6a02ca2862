use crate::error::{Result, YardproofError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::render::layout::{CANVAS_HEIGHT, CANVAS_WIDTH};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// TTF/OTF used by the raster backend; system search when unset
    pub font_path: Option<PathBuf>,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Default products.json when the CLI gets no --catalog
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| YardproofError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("yardproof").join("config.json"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_path: None,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            catalog_path: None,
        }
    }
}
