//! Catalog repository trait and the in-memory catalog.

use serde::{Deserialize, Serialize};

use super::model::{Category, Item};
use crate::error::{BrocanteError, Result};

/// Source of the browsable catalog.
///
/// Implementations hand out borrowed slices: the catalog is loaded once and
/// filtered many times.
pub trait CatalogRepository: Send + Sync {
    /// All items, in display order.
    fn items(&self) -> &[Item];

    /// Browsable categories, in display order.
    fn categories(&self) -> &[Category];

    /// Cities offered by the location picker.
    fn cities(&self) -> &[String];

    /// Appends a newly posted item.
    ///
    /// # Errors
    ///
    /// Returns a validation error if an item with the same id already exists.
    fn publish(&mut self, item: Item) -> Result<()>;

    /// Looks up an item by id.
    fn find_by_id(&self, id: &str) -> Option<&Item> {
        self.items().iter().find(|item| item.id == id)
    }

    /// Whether `id` names a known item.
    fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Looks up a category by id.
    fn category(&self, id: &str) -> Option<&Category> {
        self.categories().iter().find(|category| category.id == id)
    }

    /// Looks up a category by display name, case-insensitively.
    fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories()
            .iter()
            .find(|category| category.name.eq_ignore_ascii_case(name))
    }
}

/// A catalog held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>, categories: Vec<Category>, cities: Vec<String>) -> Self {
        Self {
            categories,
            cities,
            items,
        }
    }

    /// Rejects catalogs with duplicate item ids.
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(BrocanteError::validation(format!(
                    "duplicate item id '{}'",
                    item.id
                )));
            }
        }
        Ok(())
    }
}

impl CatalogRepository for Catalog {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn cities(&self) -> &[String] {
        &self.cities
    }

    fn publish(&mut self, item: Item) -> Result<()> {
        if self.contains(&item.id) {
            return Err(BrocanteError::validation(format!(
                "item '{}' is already listed",
                item.id
            )));
        }
        tracing::info!("Published item {} ({})", item.id, item.title);
        self.items.push(item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::{Condition, SellerRef};
    use chrono::Utc;

    fn item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            title: format!("Item {}", id),
            description: String::new(),
            price: 5.0,
            images: Vec::new(),
            category: "Books".to_string(),
            condition: Condition::Fair,
            location: "Paris".to_string(),
            posted_at: Utc::now(),
            seller: SellerRef {
                id: "1".to_string(),
                name: "Camille".to_string(),
                avatar: String::new(),
            },
            is_favorite: false,
        }
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::new(vec![item("1"), item("2")], Vec::new(), Vec::new());
        assert_eq!(catalog.find_by_id("2").map(|i| i.id.as_str()), Some("2"));
        assert!(catalog.find_by_id("3").is_none());
        assert!(catalog.contains("1"));
    }

    #[test]
    fn test_publish_appends_and_rejects_duplicates() {
        let mut catalog = Catalog::new(vec![item("1")], Vec::new(), Vec::new());

        catalog.publish(item("2")).unwrap();
        assert_eq!(catalog.items().last().map(|i| i.id.as_str()), Some("2"));

        let err = catalog.publish(item("1")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(catalog.items().len(), 2);
    }

    #[test]
    fn test_validate_duplicate_ids() {
        let catalog = Catalog::new(vec![item("1"), item("1")], Vec::new(), Vec::new());
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_category_lookup() {
        let catalog = Catalog::new(
            Vec::new(),
            vec![Category::new("1", "Electronics", "Smartphone")],
            Vec::new(),
        );
        assert!(catalog.category("1").is_some());
        assert!(catalog.category_by_name("electronics").is_some());
        assert!(catalog.category_by_name("Garden").is_none());
    }
}
