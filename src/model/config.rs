use serde::{Deserialize, Serialize};

/// Configuration from shelf/config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfConfig {
    pub shelf: ShelfInfo,
    #[serde(default)]
    pub films: FilmsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfInfo {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmsConfig {
    /// Start a fresh film guide with the boilerplate entries.
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for FilmsConfig {
    fn default() -> Self {
        FilmsConfig { seed: true }
    }
}

fn default_true() -> bool {
    true
}
