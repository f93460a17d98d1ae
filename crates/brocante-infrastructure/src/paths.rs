//! Path resolution for Brocante's configuration files.
//!
//! ```text
//! ~/.config/brocante/          # Config directory (platform equivalent elsewhere)
//! ├── config.toml              # Application configuration
//! └── catalog.toml             # Optional catalog fixture
//! ```

use brocante_core::error::{BrocanteError, Result};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "brocante";
const CONFIG_FILE: &str = "config.toml";

pub struct BrocantePaths;

impl BrocantePaths {
    /// The Brocante configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| BrocanteError::config("Cannot find config directory"))
    }

    /// Path to `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Resolves `path` against `base` unless it is already absolute.
    pub fn resolve(base: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }
}
