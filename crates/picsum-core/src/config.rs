use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BATCH_SIZE, DEFAULT_FETCH_TIMEOUT_SECS, PICSUM_URL, WINDOW_HEIGHT, WINDOW_TITLE,
    WINDOW_WIDTH,
};
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl ViewerConfig {
    /// Parse a TOML document; missing sections and fields keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Where the image batch comes from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    /// Number of images requested per batch.
    pub batch_size: usize,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: PICSUM_URL.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}
