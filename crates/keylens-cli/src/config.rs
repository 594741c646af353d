//! Viewer configuration.
//!
//! Loaded from `~/.config/keylens/config.toml` when present; command-line
//! flags override individual fields.
//!
//! ```toml
//! catalog_path = "/data/keywords/catalog.csv"
//! chart_size = 10
//! session = "default"
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use keylens_infrastructure::paths::KeylensPaths;
use serde::Deserialize;

/// Configuration file contents; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewerConfig {
    /// Path to the catalog CSV. Falls back to the default data location.
    pub catalog_path: Option<PathBuf>,
    /// Number of rows in the frequency chart.
    pub chart_size: Option<usize>,
    /// Session id used when `--session` is not given.
    pub session: Option<String>,
}

impl ViewerConfig {
    /// Loads the config file, returning defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = KeylensPaths::config_file()?;
        Self::load_from(path)
    }

    /// Loads from an explicit path (missing file yields defaults).
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => return Err(e).context(format!("Failed to read {}", path.display())),
        };

        toml::from_str(&text).context(format!("Failed to parse {}", path.display()))
    }
}
