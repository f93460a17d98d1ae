use anyhow::{Context, Result};
use brocante_core::AppContext;
use brocante_core::catalog::Item;
use brocante_core::format::format_currency;
use brocante_infrastructure::{ConfigService, TomlCatalogRepository};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::GlobalOpts;

/// Config service for `--config`, or the default location.
pub fn config_service(global: &GlobalOpts) -> Result<ConfigService> {
    match &global.config {
        Some(path) => Ok(ConfigService::with_path(path.clone())),
        None => ConfigService::new().context("Failed to locate the configuration directory"),
    }
}

/// Logs to stderr, filtered by `RUST_LOG` or the configured level.
pub fn init_tracing(service: &ConfigService) {
    let level = service
        .get_config()
        .map(|config| config.logging.level)
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Catalog from `--catalog`, the configured path, or the built-in sample.
pub fn load_repository(global: &GlobalOpts, service: &ConfigService) -> Result<TomlCatalogRepository> {
    let path = match &global.catalog {
        Some(path) => Some(path.clone()),
        None => service.catalog_path().context("Failed to read configuration")?,
    };

    match path {
        Some(path) => TomlCatalogRepository::load(path.clone())
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => {
            tracing::debug!("No catalog configured, using the built-in sample");
            TomlCatalogRepository::sample().context("Failed to load the built-in sample catalog")
        }
    }
}

/// Application context assembled from configuration and catalog.
pub fn open_context(global: &GlobalOpts, service: &ConfigService) -> Result<AppContext> {
    let repository = load_repository(global, service)?;
    context_for(repository, service)
}

/// Application context around an already loaded catalog.
pub fn context_for(repository: TomlCatalogRepository, service: &ConfigService) -> Result<AppContext> {
    let config = service.get_config().context("Failed to read configuration")?;
    let inbox = repository.inbox();
    Ok(AppContext::from_config(Box::new(repository), inbox, config))
}

/// One-line listing summary.
pub fn item_line(item: &Item, is_favorite: bool) -> String {
    format!(
        "{} {:<4} {:<32} {:>10}  {} · {}",
        if is_favorite { "♥" } else { " " },
        item.id,
        item.title,
        format_currency(item.price),
        item.location,
        item.category
    )
}

pub fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
