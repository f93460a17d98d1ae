pub mod config_service;
pub mod paths;
pub mod storage;
pub mod toml_catalog_repository;

pub use crate::config_service::ConfigService;
pub use crate::paths::BrocantePaths;
pub use crate::toml_catalog_repository::{CatalogFile, TomlCatalogRepository};
