use std::fs;
use std::path::{Path, PathBuf};

use crate::io::storage::Storage;
use crate::model::config::ShelfConfig;

/// Error type for shelf I/O operations
#[derive(Debug, thiserror::Error)]
pub enum ShelfError {
    #[error("not a shelf: no shelf/ directory found (run `sf init` first)")]
    NotAShelf,
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A loaded shelf: the root it was discovered from, its data directory, and
/// the parsed config. Constructed once per process.
#[derive(Debug, Clone)]
pub struct Shelf {
    pub root: PathBuf,
    pub shelf_dir: PathBuf,
    pub config: ShelfConfig,
}

impl Shelf {
    /// Key-value storage rooted at the shelf's data directory.
    pub fn storage(&self) -> Storage {
        Storage::new(&self.shelf_dir)
    }
}

/// Discover the shelf by walking up from the given directory, looking for a
/// `shelf/` subdirectory with a config.
pub fn discover_shelf(start: &Path) -> Result<PathBuf, ShelfError> {
    let mut current = start.to_path_buf();
    loop {
        let shelf_dir = current.join("shelf");
        if shelf_dir.is_dir() && shelf_dir.join("config.toml").exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(ShelfError::NotAShelf);
        }
    }
}

/// Load a shelf from the given root directory.
pub fn load_shelf(root: &Path) -> Result<Shelf, ShelfError> {
    let shelf_dir = root.join("shelf");
    if !shelf_dir.is_dir() {
        return Err(ShelfError::NotAShelf);
    }

    let config_path = shelf_dir.join("config.toml");
    let config_text = fs::read_to_string(&config_path).map_err(|e| ShelfError::Read {
        path: config_path.clone(),
        source: e,
    })?;
    let config: ShelfConfig = toml::from_str(&config_text)?;

    Ok(Shelf {
        root: root.to_path_buf(),
        shelf_dir,
        config,
    })
}
