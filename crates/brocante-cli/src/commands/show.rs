use anyhow::{Result, anyhow};
use brocante_core::format::{format_currency, format_date};
use brocante_infrastructure::ConfigService;
use serde_json::json;

use super::utils::{context_for, load_repository, print_json};
use crate::GlobalOpts;

pub fn run(global: &GlobalOpts, service: &ConfigService, id: &str) -> Result<()> {
    let repository = load_repository(global, service)?;
    // Seller profiles live in the fixture, not in the item itself.
    let users = repository.users().to_vec();

    let ctx = context_for(repository, service)?;
    let view = ctx
        .product(id)
        .ok_or_else(|| anyhow!("No item with id '{}'", id))?;
    let item = view.item;
    let seller = users.iter().find(|user| user.id == item.seller.id);

    if global.json {
        return print_json(&json!({
            "item": item,
            "is_favorite": view.is_favorite,
            "seller": seller,
        }));
    }

    println!("{}{}", item.title, if view.is_favorite { "  ♥" } else { "" });
    println!("{}", format_currency(item.price));
    println!("{} · {}", item.category, item.condition.label());
    println!("{} · posted {}", item.location, format_date(item.posted_at));
    match seller {
        Some(user) if user.rating > 0.0 => {
            println!("Sold by {} (★ {:.1})", item.seller.name, user.rating)
        }
        _ => println!("Sold by {}", item.seller.name),
    }
    if !item.description.is_empty() {
        println!();
        println!("{}", item.description);
    }
    Ok(())
}
