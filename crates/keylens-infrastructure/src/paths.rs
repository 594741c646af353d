//! Unified path management for KeyLens files.
//!
//! All configuration, catalog, detail, and session state files live under
//! one per-user directory tree so every storage implementation resolves
//! locations the same way.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for KeyLens.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/keylens/           # Config directory
/// ├── config.toml              # Viewer configuration
/// ├── details.toml             # User-authored keyword details (optional)
/// └── sessions/                # One TOML state file per session id
///     └── default.toml
///
/// ~/.local/share/keylens/      # Data directory
/// └── catalog.csv              # Keyword catalog source
/// ```
pub struct KeylensPaths;

impl KeylensPaths {
    /// Returns the KeyLens configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/keylens/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("keylens"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the KeyLens data directory (for larger files such as the
    /// catalog CSV).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("keylens"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the viewer configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the user-authored details file.
    pub fn details_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("details.toml"))
    }

    /// Returns the directory holding per-session state files.
    pub fn sessions_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("sessions"))
    }

    /// Returns the default catalog CSV path.
    pub fn catalog_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("catalog.csv"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths_share_one_root() {
        let config_dir = KeylensPaths::config_dir().unwrap();
        assert!(KeylensPaths::config_file().unwrap().starts_with(&config_dir));
        assert!(KeylensPaths::details_file().unwrap().starts_with(&config_dir));
        assert!(KeylensPaths::sessions_dir().unwrap().starts_with(&config_dir));
    }
}
