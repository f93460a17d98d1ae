//! Application context.
//!
//! `AppContext` owns the catalog, the session, the inbox and the navigation
//! gate, and is passed explicitly to the screens that need them. Protected
//! operations consult the gate first and report a redirect instead of acting
//! when the session may not proceed.

use chrono::Utc;

use crate::catalog::{self, CatalogRepository, FilterCriteria, Item, ItemDraft};
use crate::config::RootConfig;
use crate::error::{BrocanteError, Result};
use crate::gate::{GateDecision, NavigationGate, ProtectedAction};
use crate::messaging::{Inbox, Message};
use crate::session::{SessionState, User};

/// Result of a gated operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Gated<T> {
    Granted(T),
    RedirectToLogin,
}

impl<T> Gated<T> {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }

    pub fn granted(self) -> Option<T> {
        match self {
            Self::Granted(value) => Some(value),
            Self::RedirectToLogin => None,
        }
    }
}

/// An item as shown on the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView<'a> {
    pub item: &'a Item,
    pub is_favorite: bool,
}

pub struct AppContext {
    catalog: Box<dyn CatalogRepository>,
    session: SessionState,
    gate: NavigationGate,
    inbox: Inbox,
    config: RootConfig,
}

impl AppContext {
    /// Assembles a context from its parts.
    pub fn new(
        catalog: Box<dyn CatalogRepository>,
        session: SessionState,
        gate: NavigationGate,
        inbox: Inbox,
        config: RootConfig,
    ) -> Self {
        Self {
            catalog,
            session,
            gate,
            inbox,
            config,
        }
    }

    /// Builds the start-of-process context described by `config`.
    pub fn from_config(catalog: Box<dyn CatalogRepository>, inbox: Inbox, config: RootConfig) -> Self {
        let session = SessionState::seeded(
            config.session.default_user.clone(),
            config.session.start_authenticated,
            catalog.items(),
        );
        let gate = NavigationGate::from_table(config.access.clone());
        Self::new(catalog, session, gate, inbox, config)
    }

    pub fn catalog(&self) -> &dyn CatalogRepository {
        self.catalog.as_ref()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    pub fn gate(&self) -> &NavigationGate {
        &self.gate
    }

    pub fn config(&self) -> &RootConfig {
        &self.config
    }

    // ============================================================================
    // Browsing
    // ============================================================================

    pub fn search(&self, criteria: &FilterCriteria) -> Vec<&Item> {
        catalog::filter(self.catalog.items(), criteria)
    }

    /// The home screen's featured strip.
    pub fn featured(&self) -> &[Item] {
        catalog::featured(self.catalog.items(), self.config.catalog.featured_count)
    }

    pub fn product(&self, id: &str) -> Option<ProductView<'_>> {
        self.catalog.find_by_id(id).map(|item| ProductView {
            item,
            is_favorite: self.session.is_favorite(id),
        })
    }

    /// Favorited items that are still in the catalog, in favoriting order.
    pub fn favorite_items(&self) -> Vec<&Item> {
        self.session
            .favorites()
            .ids()
            .iter()
            .filter_map(|id| self.catalog.find_by_id(id))
            .collect()
    }

    /// Toggles a favorite, checking the catalog when configured to.
    pub fn toggle_favorite(&mut self, item_id: &str) -> Result<bool> {
        if self.config.favorites.validate_on_toggle {
            self.session
                .toggle_favorite_checked(item_id, self.catalog.as_ref())
        } else {
            Ok(self.session.toggle_favorite(item_id))
        }
    }

    // ============================================================================
    // Gated operations
    // ============================================================================

    pub fn route(&self, action: ProtectedAction) -> GateDecision {
        self.gate.route(&self.session, action)
    }

    /// The signed-in user's profile.
    pub fn open_profile(&self) -> Gated<&User> {
        match (self.route(ProtectedAction::ViewProfile), self.session.user()) {
            (GateDecision::Proceed, Some(user)) => Gated::Granted(user),
            _ => Gated::RedirectToLogin,
        }
    }

    pub fn open_inbox(&self) -> Gated<&Inbox> {
        match self.route(ProtectedAction::ViewMessages) {
            GateDecision::Proceed => Gated::Granted(&self.inbox),
            GateDecision::RedirectToLogin => Gated::RedirectToLogin,
        }
    }

    pub fn open_inbox_mut(&mut self) -> Gated<&mut Inbox> {
        match self.route(ProtectedAction::ViewMessages) {
            GateDecision::Proceed => Gated::Granted(&mut self.inbox),
            GateDecision::RedirectToLogin => Gated::RedirectToLogin,
        }
    }

    /// Publishes a draft as the signed-in user.
    pub fn publish(&mut self, draft: ItemDraft) -> Result<Gated<String>> {
        let seller = match (self.route(ProtectedAction::PostItem), self.session.user()) {
            (GateDecision::Proceed, Some(user)) => user.clone(),
            _ => return Ok(Gated::RedirectToLogin),
        };

        let item = draft.into_item(&seller, Utc::now())?;
        let id = item.id.clone();
        self.catalog.publish(item)?;
        Ok(Gated::Granted(id))
    }

    /// Sends a message as the signed-in user.
    pub fn send_message(&mut self, conversation_id: &str, content: &str) -> Result<Gated<Message>> {
        let sender_id = match (self.route(ProtectedAction::SendMessage), self.session.user()) {
            (GateDecision::Proceed, Some(user)) => user.id.clone(),
            _ => return Ok(Gated::RedirectToLogin),
        };

        let message = self
            .inbox
            .send(conversation_id, &sender_id, content, Utc::now())?;
        Ok(Gated::Granted(message))
    }

    /// Resolves a category by id, as the category strip hands it over.
    pub fn category(&self, id: &str) -> Result<&catalog::Category> {
        self.catalog
            .category(id)
            .ok_or_else(|| BrocanteError::not_found("category", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category, Condition, SellerRef};
    use crate::messaging::{Conversation, ItemRef, Participant};

    fn item(id: &str, title: &str, category: &str, location: &str, is_favorite: bool) -> Item {
        Item {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            price: 30.0,
            images: Vec::new(),
            category: category.to_string(),
            condition: Condition::Good,
            location: location.to_string(),
            posted_at: Utc::now(),
            seller: SellerRef {
                id: "2".to_string(),
                name: "Sophie".to_string(),
                avatar: String::new(),
            },
            is_favorite,
        }
    }

    fn context(config: RootConfig) -> AppContext {
        let catalog = Catalog::new(
            vec![
                item("1", "Blue Lamp", "Furniture", "Paris", true),
                item("2", "Red Shoes", "Fashion", "Lyon", false),
                item("3", "Desk", "Furniture", "Lyon", false),
            ],
            vec![
                Category::new("c1", "Furniture", "Sofa"),
                Category::new("c2", "Fashion", "Shirt"),
            ],
            vec!["Paris".to_string(), "Lyon".to_string()],
        );
        let inbox = Inbox::from_parts(
            vec![Conversation {
                id: "1".to_string(),
                participant: Participant {
                    id: "2".to_string(),
                    name: "Sophie".to_string(),
                    avatar: String::new(),
                },
                item: ItemRef {
                    id: "1".to_string(),
                    title: "Blue Lamp".to_string(),
                    image: String::new(),
                },
                last_message: String::new(),
                last_message_at: Utc::now(),
                unread_count: 1,
            }],
            Vec::new(),
        );
        AppContext::from_config(Box::new(catalog), inbox, config)
    }

    fn anonymous_config() -> RootConfig {
        let mut config = RootConfig::default();
        config.session.start_authenticated = false;
        config
    }

    #[test]
    fn test_from_config_seeds_session() {
        let ctx = context(RootConfig::default());
        assert!(ctx.session().is_authenticated());
        assert!(ctx.session().is_favorite("1"));
        assert_eq!(ctx.featured().len(), 2);
    }

    #[test]
    fn test_search_and_product() {
        let ctx = context(RootConfig::default());
        let category = ctx.category("c1").unwrap().clone();
        let hits = ctx.search(&FilterCriteria::new().with_category(category).with_city("Lyon"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");

        let view = ctx.product("1").unwrap();
        assert!(view.is_favorite);
        assert!(ctx.product("404").is_none());
        assert!(ctx.category("c9").unwrap_err().is_not_found());
    }

    #[test]
    fn test_favorite_items_follow_toggle_order() {
        let mut ctx = context(RootConfig::default());
        ctx.toggle_favorite("3").unwrap();
        ctx.toggle_favorite("ghost").unwrap();

        let ids: Vec<&str> = ctx.favorite_items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_validated_toggle_when_configured() {
        let mut config = RootConfig::default();
        config.favorites.validate_on_toggle = true;
        let mut ctx = context(config);

        assert!(ctx.toggle_favorite("ghost").unwrap_err().is_not_found());
        assert!(ctx.toggle_favorite("2").unwrap());
    }

    #[test]
    fn test_gated_operations_redirect_when_logged_out() {
        let mut ctx = context(anonymous_config());

        assert_eq!(ctx.open_profile(), Gated::RedirectToLogin);
        assert!(!ctx.open_inbox().is_granted());
        assert_eq!(ctx.send_message("1", "hi").unwrap(), Gated::RedirectToLogin);

        let draft = ItemDraft {
            title: "Vase".to_string(),
            description: String::new(),
            price: 8.0,
            category: "Furniture".to_string(),
            condition: Condition::New,
            location: "Paris".to_string(),
            images: Vec::new(),
        };
        assert_eq!(ctx.publish(draft).unwrap(), Gated::RedirectToLogin);
        assert_eq!(ctx.catalog().items().len(), 3);
    }

    #[test]
    fn test_gated_operations_after_login() {
        let mut ctx = context(anonymous_config());
        ctx.session_mut().login();

        assert!(ctx.open_profile().is_granted());
        let sent = ctx.send_message("1", "Still available?").unwrap().granted().unwrap();
        assert_eq!(sent.sender_id, "1");
        assert_eq!(ctx.open_inbox().granted().unwrap().messages("1").len(), 1);

        let draft = ItemDraft {
            title: "Vase".to_string(),
            description: String::new(),
            price: 8.0,
            category: "Furniture".to_string(),
            condition: Condition::New,
            location: "Paris".to_string(),
            images: Vec::new(),
        };
        let id = ctx.publish(draft).unwrap().granted().unwrap();
        assert!(ctx.product(&id).is_some());
    }

    #[test]
    fn test_logout_keeps_favorites_in_context() {
        let mut ctx = context(RootConfig::default());
        ctx.session_mut().logout();
        assert!(!ctx.session().is_authenticated());
        assert_eq!(ctx.favorite_items().len(), 1);
    }
}
