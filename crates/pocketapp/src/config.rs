//! # Configuration
//!
//! Pocket configuration is loaded with [`confique`], layered from environment
//! variables and TOML files.
//!
//! ## Resolution Order
//!
//! Highest priority first:
//! 1. **Environment variables**: `POCKET_LIBRARY_ACCESS`, `POCKET_CAMERA_ACCESS`,
//!    `POCKET_COLOR`, `POCKET_SHOW_COUNTS`.
//! 2. **Explicit file**: the path given with `--config`.
//! 3. **User file**: `pocket.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! Missing files are skipped. A file that exists but does not parse is an error.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `library_access` | `true` | Answer to photo library permission requests |
//! | `camera_access` | `false` | Answer to camera permission requests |
//! | `color` | `true` | Colored output |
//! | `show_counts` | `true` | Print the `done/total` line after todo changes |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "pocket.toml";

#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PocketConfig {
    /// Grant photo library access when a session asks for it.
    #[config(env = "POCKET_LIBRARY_ACCESS", default = true)]
    pub library_access: bool,

    /// Grant camera access when a session asks for it. Terminals rarely have one.
    #[config(env = "POCKET_CAMERA_ACCESS", default = false)]
    pub camera_access: bool,

    #[config(env = "POCKET_COLOR", default = true)]
    pub color: bool,

    #[config(env = "POCKET_SHOW_COUNTS", default = true)]
    pub show_counts: bool,
}

impl Default for PocketConfig {
    fn default() -> Self {
        Self {
            library_access: true,
            camera_access: false,
            color: true,
            show_counts: true,
        }
    }
}

impl PocketConfig {
    /// Where the user-level config file lives, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "pocket", "pocket")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Loads env, then `explicit`, then the user file, then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = explicit {
            builder = builder.file(path);
        }
        if let Some(path) = Self::default_path() {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Loads a single file over the defaults, ignoring env and the user file.
    pub fn load_file(path: &Path) -> Result<Self> {
        Ok(Self::builder().file(path).load()?)
    }

    /// The resolved values in the same TOML shape `pocket.toml` uses.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = PocketConfig::default();
        assert!(config.library_access);
        assert!(!config.camera_access);
        assert!(config.color);
        assert!(config.show_counts);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PocketConfig::load_file(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, PocketConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "camera_access = true\ncolor = false\n").unwrap();

        let config = PocketConfig::load_file(&path).unwrap();

        assert!(config.camera_access);
        assert!(!config.color);
        assert!(config.library_access);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "camera_access = \"sometimes\"\n").unwrap();

        assert!(PocketConfig::load_file(&path).is_err());
    }

    #[test]
    fn test_to_toml_reads_back_as_config_file() {
        let config = PocketConfig {
            camera_access: true,
            show_counts: false,
            ..Default::default()
        };
        let text = config.to_toml().unwrap();
        assert!(text.contains("camera_access = true"));
        assert!(text.contains("show_counts = false"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, &text).unwrap();
        assert_eq!(PocketConfig::load_file(&path).unwrap(), config);
    }
}
