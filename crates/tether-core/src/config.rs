//! Application configuration, loaded once at start-up.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::host::Asset;
use crate::theme::Theme;

/// Locations of the external engines' scripts and styles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub katex_script: String,
    pub katex_style: String,
    pub highlight_script: String,
    /// Highlighter color scheme stylesheet.
    pub highlight_style: String,
    /// Optional language packs loaded after the highlighter itself.
    pub highlight_languages: Vec<String>,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            katex_script: "katex/katex.min.js".to_string(),
            katex_style: "katex/katex.min.css".to_string(),
            highlight_script: "highlight/highlight.min.js".to_string(),
            highlight_style: "highlight/styles/default.min.css".to_string(),
            highlight_languages: Vec::new(),
        }
    }
}

impl AssetPaths {
    pub fn katex(&self) -> Vec<Asset> {
        vec![
            Asset::script(&self.katex_script),
            Asset::stylesheet(&self.katex_style),
        ]
    }

    pub fn highlight(&self) -> Vec<Asset> {
        let mut assets = vec![
            Asset::script(&self.highlight_script),
            Asset::stylesheet(&self.highlight_style),
        ];
        assets.extend(self.highlight_languages.iter().map(Asset::from_path));
        assets
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default theme handed to widget constructors.
    pub theme: Theme,
    pub assets: AssetPaths,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
