//! Catalog domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Physical condition of a listed item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl Condition {
    /// Human-readable label, as shown on listing cards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::LikeNew => "Like new",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// Reference to the user selling an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

/// A marketplace listing.
///
/// Items are supplied by a catalog repository and never mutated while the
/// process runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    /// Category label, matched against `Category::name`
    pub category: String,
    pub condition: Condition,
    /// City the item is offered in
    pub location: String,
    pub posted_at: DateTime<Utc>,
    pub seller: SellerRef,
    /// Seed flag for the initial favorites set. Not consulted afterwards.
    #[serde(default)]
    pub is_favorite: bool,
}

impl Item {
    /// First image, used as the thumbnail.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A browsable category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Icon name, resolved through [`CategoryIcon::from_name`]
    pub icon: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// Resolved icon for this category.
    pub fn icon_kind(&self) -> CategoryIcon {
        CategoryIcon::from_name(&self.icon)
    }
}

/// Closed set of icons a category can display.
///
/// Icon names come from data files as strings; anything not listed here
/// renders as [`CategoryIcon::Box`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
pub enum CategoryIcon {
    Smartphone,
    Laptop,
    Shirt,
    Sofa,
    Lamp,
    Bike,
    Car,
    Book,
    Baby,
    Gamepad2,
    Music,
    Dumbbell,
    Camera,
    Watch,
    Home,
    Gem,
    #[default]
    Box,
}

impl CategoryIcon {
    /// Resolves an icon name, falling back to the default icon.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}
