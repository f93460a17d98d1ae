//! Item drafts from the "post an item" form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{Condition, Item, SellerRef};
use crate::error::{BrocanteError, Result};
use crate::session::User;

/// Unvalidated listing as typed into the posting form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    pub condition: Condition,
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl ItemDraft {
    /// Checks the fields the listing cannot do without.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(BrocanteError::validation("title is required"));
        }
        if self.category.trim().is_empty() {
            return Err(BrocanteError::validation("category is required"));
        }
        if self.location.trim().is_empty() {
            return Err(BrocanteError::validation("location is required"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(BrocanteError::validation(format!(
                "price must be a non-negative amount, got {}",
                self.price
            )));
        }
        Ok(())
    }

    /// Validates the draft and turns it into a listed item with a fresh id.
    pub fn into_item(self, seller: &User, posted_at: DateTime<Utc>) -> Result<Item> {
        self.validate()?;

        Ok(Item {
            id: Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price,
            images: self.images,
            category: self.category,
            condition: self.condition,
            location: self.location,
            posted_at,
            seller: SellerRef {
                id: seller.id.clone(),
                name: seller.name.clone(),
                avatar: seller.avatar.clone(),
            },
            is_favorite: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ItemDraft {
        ItemDraft {
            title: "  Road bike ".to_string(),
            description: "Aluminium frame".to_string(),
            price: 180.0,
            category: "Sports".to_string(),
            condition: Condition::Good,
            location: "Lyon".to_string(),
            images: vec!["bike.jpg".to_string()],
        }
    }

    #[test]
    fn test_into_item_assigns_id_and_seller() {
        let seller = User::default();
        let now = Utc::now();
        let item = draft().into_item(&seller, now).unwrap();

        assert!(Uuid::parse_str(&item.id).is_ok());
        assert_eq!(item.title, "Road bike");
        assert_eq!(item.seller.id, seller.id);
        assert_eq!(item.posted_at, now);
        assert!(!item.is_favorite);
    }

    #[test]
    fn test_missing_title_rejected() {
        let mut bad = draft();
        bad.title = "   ".to_string();
        assert!(bad.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_negative_or_nan_price_rejected() {
        let mut bad = draft();
        bad.price = -1.0;
        assert!(bad.validate().is_err());

        bad.price = f64::NAN;
        assert!(bad.validate().is_err());
    }
}
