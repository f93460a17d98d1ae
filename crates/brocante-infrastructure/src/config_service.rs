//! Configuration service.
//!
//! Loads the root configuration from `~/.config/brocante/config.toml` (or an
//! explicit path) and caches it.

use crate::paths::BrocantePaths;
use crate::storage::AtomicTomlFile;
use brocante_core::config::RootConfig;
use brocante_core::error::{BrocanteError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    file: AtomicTomlFile<RootConfig>,
    /// Cached configuration, filled on first access.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service for the default config path.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(BrocantePaths::config_file()?))
    }

    /// Creates a service for a custom config path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn config_path(&self) -> &Path {
        self.file.path()
    }

    /// Directory relative paths in the configuration resolve against.
    pub fn base_dir(&self) -> PathBuf {
        self.file
            .path()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    /// Gets the root configuration, loading it if not cached.
    ///
    /// A missing file yields the defaults. A malformed file is an error.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| BrocanteError::internal("config cache lock poisoned"))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = match self.file.load()? {
            Some(config) => {
                tracing::debug!("Loaded config from {}", self.file.path().display());
                config
            }
            None => {
                tracing::debug!(
                    "No config at {}, using defaults",
                    self.file.path().display()
                );
                RootConfig::default()
            }
        };

        let mut write_lock = self
            .config
            .write()
            .map_err(|_| BrocanteError::internal("config cache lock poisoned"))?;
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    /// Writes `config` to disk and caches it.
    pub fn save(&self, config: &RootConfig) -> Result<()> {
        self.file.save(config)?;
        let mut write_lock = self
            .config
            .write()
            .map_err(|_| BrocanteError::internal("config cache lock poisoned"))?;
        *write_lock = Some(config.clone());
        Ok(())
    }

    /// Writes the default configuration unless a file already exists.
    ///
    /// Returns whether a file was created.
    pub fn init(&self) -> Result<bool> {
        if self.file.exists() {
            return Ok(false);
        }
        self.save(&RootConfig::default())?;
        tracing::info!("Created {}", self.file.path().display());
        Ok(true)
    }

    /// Catalog fixture path from the configuration, resolved against the
    /// config directory.
    pub fn catalog_path(&self) -> Result<Option<PathBuf>> {
        let config = self.get_config()?;
        Ok(config
            .catalog
            .path
            .map(|path| BrocantePaths::resolve(&self.base_dir(), &path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        assert_eq!(service.get_config().unwrap(), RootConfig::default());
        assert!(!service.config_path().exists());
    }

    #[test]
    fn test_cache_until_invalidated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let service = ConfigService::with_path(path.clone());
        assert!(service.get_config().unwrap().session.start_authenticated);

        fs::write(&path, "[session]\nstart_authenticated = false\n").unwrap();
        assert!(service.get_config().unwrap().session.start_authenticated);

        service.invalidate_cache();
        assert!(!service.get_config().unwrap().session.start_authenticated);
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("brocante/config.toml");
        let service = ConfigService::with_path(path.clone());

        assert!(service.init().unwrap());
        assert!(path.exists());

        fs::write(&path, "[catalog]\nfeatured_count = 4\n").unwrap();
        assert!(!service.init().unwrap());
        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().catalog.featured_count, 4);
    }

    #[test]
    fn test_catalog_path_resolves_against_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[catalog]\npath = \"fixtures/catalog.toml\"\n").unwrap();

        let service = ConfigService::with_path(path);
        assert_eq!(
            service.catalog_path().unwrap(),
            Some(temp_dir.path().join("fixtures/catalog.toml"))
        );
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[session]\nstart_authenticated = \"maybe\"\n").unwrap();

        let err = ConfigService::with_path(path).get_config().unwrap_err();
        assert!(err.is_config());
    }
}
