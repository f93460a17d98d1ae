//! Catalog filtering.
//!
//! The search screen recomputes its results on every keystroke, so the
//! matcher lowercases the query once per invocation and borrows items instead
//! of cloning them.

use super::criteria::FilterCriteria;
use super::model::Item;

/// A compiled form of [`FilterCriteria`], ready to test items against.
#[derive(Debug, Clone)]
pub struct Matcher<'c> {
    /// Lowercased query, `None` when the query is empty
    needle: Option<String>,
    category: Option<&'c str>,
    city: Option<&'c str>,
}

impl<'c> Matcher<'c> {
    pub fn new(criteria: &'c FilterCriteria) -> Self {
        let needle = if criteria.query.is_empty() {
            None
        } else {
            Some(criteria.query.to_lowercase())
        };

        Self {
            needle,
            category: criteria.category.as_ref().map(|c| c.name.as_str()),
            city: criteria.city.as_deref().filter(|city| !city.is_empty()),
        }
    }

    /// Text, category and city predicates, all of which must hold.
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_text(item) && self.matches_category(item) && self.matches_city(item)
    }

    fn matches_text(&self, item: &Item) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => {
                contains_ignore_case(&item.title, needle)
                    || contains_ignore_case(&item.description, needle)
            }
        }
    }

    fn matches_category(&self, item: &Item) -> bool {
        self.category.is_none_or(|name| item.category == name)
    }

    fn matches_city(&self, item: &Item) -> bool {
        self.city.is_none_or(|city| item.location == city)
    }
}

/// Returns the items matching `criteria`, in their original order.
pub fn filter<'a>(items: &'a [Item], criteria: &FilterCriteria) -> Vec<&'a Item> {
    let matcher = Matcher::new(criteria);
    let result: Vec<&Item> = items.iter().filter(|item| matcher.matches(item)).collect();

    tracing::debug!(
        "Filtered catalog: {} of {} items (query={:?}, category={:?}, city={:?})",
        result.len(),
        items.len(),
        criteria.query,
        criteria.category.as_ref().map(|c| &c.name),
        criteria.city
    );

    result
}

/// Lazy variant of [`filter`] for callers that only need a count or a page.
pub fn filter_iter<'a, 'c>(
    items: &'a [Item],
    criteria: &'c FilterCriteria,
) -> impl Iterator<Item = &'a Item> {
    let matcher = Matcher::new(criteria);
    items.iter().filter(move |item| matcher.matches(item))
}

/// City picker search: case-insensitive substring match over the city list.
pub fn search_cities<'a>(cities: &'a [String], term: &str) -> Vec<&'a str> {
    if term.is_empty() {
        return cities.iter().map(String::as_str).collect();
    }

    let needle = term.to_lowercase();
    cities
        .iter()
        .filter(|city| contains_ignore_case(city, &needle))
        .map(String::as_str)
        .collect()
}

/// The featured strip on the home screen: the first `count` items.
pub fn featured(items: &[Item], count: usize) -> &[Item] {
    &items[..count.min(items.len())]
}

/// Substring test against an already-lowercased needle.
///
/// ASCII haystacks are scanned in place; anything else is lowercased first.
fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    if haystack.is_ascii() {
        // A lowercased ASCII haystack can never contain a non-ASCII needle.
        if !lowered_needle.is_ascii() {
            return false;
        }
        let needle = lowered_needle.as_bytes();
        if needle.len() > haystack.len() {
            return false;
        }
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle));
    }

    haystack.to_lowercase().contains(lowered_needle)
}
