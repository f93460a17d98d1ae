use anyhow::{Context, Result};
use brocante_infrastructure::ConfigService;

use super::utils::print_json;
use crate::GlobalOpts;

pub fn path(service: &ConfigService) {
    println!("{}", service.config_path().display());
}

pub fn show(global: &GlobalOpts, service: &ConfigService) -> Result<()> {
    let config = service.get_config().context("Failed to read configuration")?;

    if global.json {
        return print_json(&config);
    }

    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

pub fn init(service: &ConfigService) -> Result<()> {
    let path = service.config_path().display().to_string();
    if service.init().with_context(|| format!("Failed to write {}", path))? {
        println!("✅ Created {}", path);
    } else {
        println!("Config already exists at {}", path);
    }
    Ok(())
}
