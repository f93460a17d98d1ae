use super::favorites::Favorites;
use super::model::User;
use crate::catalog::{CatalogRepository, Item};
use crate::error::{BrocanteError, Result};

/// Who is logged in, and which items are favorited.
///
/// `SessionState` is owned by the application context and handed to whatever
/// needs it; there is no global instance. Every mutation runs to completion
/// under `&mut self`.
///
/// Favorites belong to the device rather than the identity: logging out keeps
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    user: Option<User>,
    default_user: User,
    favorites: Favorites,
}

impl SessionState {
    /// Creates a logged-out session that will log in as `default_user`.
    pub fn new(default_user: User) -> Self {
        Self {
            user: None,
            default_user,
            favorites: Favorites::new(),
        }
    }

    /// Builds the start-of-process session.
    ///
    /// Favorites are seeded from the items flagged `is_favorite`.
    pub fn seeded(default_user: User, start_authenticated: bool, items: &[Item]) -> Self {
        let favorites = items
            .iter()
            .filter(|item| item.is_favorite)
            .map(|item| item.id.clone())
            .collect();

        let user = start_authenticated.then(|| default_user.clone());

        Self {
            user,
            default_user,
            favorites,
        }
    }

    /// Logs in as the default identity. Does nothing when already logged in.
    pub fn login(&mut self) {
        if self.user.is_none() {
            tracing::info!("Logged in as {}", self.default_user.name);
            self.user = Some(self.default_user.clone());
        }
    }

    /// Logs in as `user`, replacing any current identity.
    pub fn login_as(&mut self, user: User) {
        tracing::info!("Logged in as {}", user.name);
        self.user = Some(user);
    }

    /// Clears the identity. Favorites are kept.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!("Logged out {}", user.name);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Toggles `item_id` in the favorites set without checking the catalog.
    ///
    /// Returns whether the item is a favorite afterwards.
    pub fn toggle_favorite(&mut self, item_id: &str) -> bool {
        let now_favorite = self.favorites.toggle(item_id);
        tracing::debug!("Favorite {} -> {}", item_id, now_favorite);
        now_favorite
    }

    /// Like [`toggle_favorite`](Self::toggle_favorite), but refuses ids the
    /// catalog does not know.
    pub fn toggle_favorite_checked(
        &mut self,
        item_id: &str,
        catalog: &dyn CatalogRepository,
    ) -> Result<bool> {
        if !catalog.contains(item_id) {
            return Err(BrocanteError::not_found("item", item_id));
        }
        Ok(self.toggle_favorite(item_id))
    }

    pub fn is_favorite(&self, item_id: &str) -> bool {
        self.favorites.contains(item_id)
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(User::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Condition, SellerRef};
    use chrono::Utc;

    fn item(id: &str, is_favorite: bool) -> Item {
        Item {
            id: id.to_string(),
            title: "Chair".to_string(),
            description: String::new(),
            price: 20.0,
            images: Vec::new(),
            category: "Furniture".to_string(),
            condition: Condition::LikeNew,
            location: "Lille".to_string(),
            posted_at: Utc::now(),
            seller: SellerRef {
                id: "5".to_string(),
                name: "Hugo".to_string(),
                avatar: String::new(),
            },
            is_favorite,
        }
    }

    #[test]
    fn test_new_is_logged_out() {
        let session = SessionState::default();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(session.favorites().is_empty());
    }

    #[test]
    fn test_login_is_idempotent() {
        let mut session = SessionState::default();
        session.login();
        session.login();
        assert!(session.is_authenticated());
        assert_eq!(session.user().map(|u| u.id.as_str()), Some("1"));
    }

    #[test]
    fn test_login_as_replaces_identity() {
        let mut session = SessionState::default();
        session.login();

        let other = User {
            id: "7".to_string(),
            name: "Inès".to_string(),
            ..User::default()
        };
        session.login_as(other);
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Inès"));
    }

    #[test]
    fn test_logout_keeps_favorites() {
        let mut session = SessionState::default();
        session.login();
        session.toggle_favorite("42");
        session.logout();

        assert!(!session.is_authenticated());
        assert!(session.is_favorite("42"));
    }

    #[test]
    fn test_seeded_from_flags() {
        let items = vec![item("1", true), item("2", false), item("3", true)];
        let session = SessionState::seeded(User::default(), true, &items);

        assert!(session.is_authenticated());
        assert_eq!(session.favorites().ids(), ["1", "3"]);

        let anonymous = SessionState::seeded(User::default(), false, &items);
        assert!(!anonymous.is_authenticated());
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut session = SessionState::default();
        assert!(session.toggle_favorite("42"));
        assert_eq!(session.favorites().ids(), ["42"]);
        assert!(!session.toggle_favorite("42"));
        assert!(session.favorites().is_empty());
    }

    #[test]
    fn test_toggle_checked_rejects_unknown() {
        let catalog = Catalog::new(vec![item("1", false)], Vec::new(), Vec::new());
        let mut session = SessionState::default();

        assert!(session.toggle_favorite_checked("1", &catalog).unwrap());
        let err = session.toggle_favorite_checked("99", &catalog).unwrap_err();
        assert!(err.is_not_found());
        assert!(!session.is_favorite("99"));
    }
}
