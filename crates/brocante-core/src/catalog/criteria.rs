//! Filter criteria and the selection rules the search screen applies to them.

use serde::{Deserialize, Serialize};

use super::model::Category;

/// The active search constraints.
///
/// Every field is optional: an empty query, no category and no city match
/// the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text query. Only the empty string disables text matching.
    #[serde(default)]
    pub query: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style query setter.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Builder-style category setter.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Builder-style city setter.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Selects `category`, or clears the selection when the same category
    /// (compared by id) is already selected.
    pub fn toggle_category(&mut self, category: &Category) {
        match &self.category {
            Some(selected) if selected.id == category.id => self.category = None,
            _ => self.category = Some(category.clone()),
        }
    }

    /// Sets or clears the city, as the location picker does. An empty name
    /// clears the selection.
    pub fn select_city(&mut self, city: Option<String>) {
        self.city = city.filter(|city| !city.is_empty());
    }

    /// Selects `city`, or clears it when it is already the selected city.
    pub fn toggle_city(&mut self, city: &str) {
        if self.city.as_deref() == Some(city) {
            self.city = None;
        } else {
            self.city = Some(city.to_string());
        }
    }

    /// Whether the category with `category_id` is the current selection.
    pub fn is_category_selected(&self, category_id: &str) -> bool {
        self.category
            .as_ref()
            .is_some_and(|selected| selected.id == category_id)
    }

    /// True when no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.category.is_none() && self.city.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn furniture() -> Category {
        Category::new("2", "Furniture", "Sofa")
    }

    #[test]
    fn test_default_is_empty() {
        assert!(FilterCriteria::new().is_empty());
        assert!(!FilterCriteria::new().with_query(" ").is_empty());
    }

    #[test]
    fn test_toggle_category_selects_then_clears() {
        let mut criteria = FilterCriteria::new();

        criteria.toggle_category(&furniture());
        assert!(criteria.is_category_selected("2"));

        criteria.toggle_category(&furniture());
        assert!(criteria.category.is_none());
    }

    #[test]
    fn test_toggle_category_replaces_other_selection() {
        let mut criteria = FilterCriteria::new().with_category(furniture());
        let fashion = Category::new("3", "Fashion", "Shirt");

        criteria.toggle_category(&fashion);
        assert!(criteria.is_category_selected("3"));
        assert!(!criteria.is_category_selected("2"));
    }

    #[test]
    fn test_toggle_city() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_city("Paris");
        assert_eq!(criteria.city.as_deref(), Some("Paris"));

        criteria.toggle_city("Lyon");
        assert_eq!(criteria.city.as_deref(), Some("Lyon"));

        criteria.toggle_city("Lyon");
        assert!(criteria.city.is_none());
    }

    #[test]
    fn test_select_and_clear() {
        let mut criteria = FilterCriteria::new().with_query("lamp");
        criteria.select_city(Some("Paris".into()));
        criteria.clear_query();
        criteria.select_city(None);
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_select_empty_city_clears() {
        let mut criteria = FilterCriteria::new().with_city("Paris");
        criteria.select_city(Some(String::new()));
        assert!(criteria.city.is_none());
        assert!(criteria.is_empty());
    }
}
