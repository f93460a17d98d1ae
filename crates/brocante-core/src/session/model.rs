//! User domain model.
//!
//! Represents the identity a session is authenticated as.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A marketplace user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined: Option<NaiveDate>,
    /// Average seller rating, 0 to 5
    #[serde(default)]
    pub rating: f32,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: "1".to_string(),
            name: "You".to_string(),
            email: String::new(),
            avatar: String::new(),
            city: String::new(),
            joined: None,
            rating: 0.0,
        }
    }
}
