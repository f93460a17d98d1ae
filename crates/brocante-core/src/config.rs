//! Application configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every section has
//! defaults, so a missing or partial file is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::gate::PolicyTable;
use crate::session::User;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RootConfig {
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub favorites: FavoriteSettings,
    /// Per-action access requirements; empty means "login required everywhere"
    #[serde(default, skip_serializing_if = "PolicyTable::is_empty")]
    pub access: PolicyTable,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SessionSettings {
    /// Start the process logged in as `default_user`
    #[serde(default = "default_true")]
    pub start_authenticated: bool,
    #[serde(default)]
    pub default_user: User,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            start_authenticated: true,
            default_user: User::default(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CatalogSettings {
    /// Catalog fixture file. Relative paths resolve against the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Number of items in the home screen's featured strip
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: None,
            featured_count: default_featured_count(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct FavoriteSettings {
    /// Refuse to favorite ids the catalog does not contain
    #[serde(default)]
    pub validate_on_toggle: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_featured_count() -> usize {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}
