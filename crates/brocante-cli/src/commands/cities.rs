use anyhow::Result;
use brocante_core::catalog::{CatalogRepository, search_cities};
use brocante_infrastructure::ConfigService;

use super::utils::{load_repository, print_json};
use crate::GlobalOpts;

pub fn run(global: &GlobalOpts, service: &ConfigService, term: Option<String>) -> Result<()> {
    let repository = load_repository(global, service)?;
    let cities = search_cities(repository.cities(), term.as_deref().unwrap_or(""));

    if global.json {
        return print_json(&cities);
    }

    if cities.is_empty() {
        println!("No cities found");
    }
    for city in cities {
        println!("{}", city);
    }
    Ok(())
}
