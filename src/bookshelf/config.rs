use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CATALOG_FILE: &str = "libros.json";

/// Configuration for bookshelf, stored as config.json in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookshelfConfig {
    /// File name of the catalog used when no explicit path is given
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,
}

fn default_catalog_file() -> String {
    DEFAULT_CATALOG_FILE.to_string()
}

impl Default for BookshelfConfig {
    fn default() -> Self {
        Self {
            catalog_file: default_catalog_file(),
        }
    }
}

impl BookshelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BookshelfConfig =
            serde_json::from_str(&content).map_err(CatalogError::Decode)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog-file" => Some(self.catalog_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "catalog-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(CatalogError::Config(
                        "catalog-file cannot be empty".to_string(),
                    ));
                }
                self.catalog_file = value.to_string();
                Ok(())
            }
            other => Err(CatalogError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &["catalog-file"]
    }
}
