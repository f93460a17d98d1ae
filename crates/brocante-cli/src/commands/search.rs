use anyhow::{Result, bail};
use brocante_core::catalog::FilterCriteria;
use brocante_core::format::results_label;
use brocante_infrastructure::ConfigService;
use serde_json::json;

use super::utils::{item_line, open_context, print_json};
use crate::GlobalOpts;

pub fn run(
    global: &GlobalOpts,
    service: &ConfigService,
    query: Option<String>,
    category: Option<String>,
    city: Option<String>,
) -> Result<()> {
    let ctx = open_context(global, service)?;

    let mut criteria = FilterCriteria::new();
    if let Some(query) = query {
        criteria.set_query(query);
    }
    if let Some(key) = category {
        let catalog = ctx.catalog();
        let Some(found) = catalog
            .category(&key)
            .or_else(|| catalog.category_by_name(&key))
        else {
            bail!("Unknown category '{}'", key);
        };
        criteria.toggle_category(found);
    }
    criteria.select_city(city);

    let results = ctx.search(&criteria);

    if global.json {
        let items: Vec<_> = results
            .iter()
            .map(|item| json!({ "item": item, "is_favorite": ctx.session().is_favorite(&item.id) }))
            .collect();
        return print_json(&items);
    }

    if criteria.is_empty() {
        println!("Featured");
        for item in ctx.featured() {
            println!("{}", item_line(item, ctx.session().is_favorite(&item.id)));
        }
        println!();
    }

    println!("{}", results_label(results.len()));
    for item in results {
        println!("{}", item_line(item, ctx.session().is_favorite(&item.id)));
    }
    Ok(())
}
