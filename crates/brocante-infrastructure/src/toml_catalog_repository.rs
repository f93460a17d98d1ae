//! TOML-based CatalogRepository implementation

use crate::storage::AtomicTomlFile;
use brocante_core::catalog::{Catalog, CatalogRepository, Category, Item};
use brocante_core::error::{BrocanteError, Result};
use brocante_core::messaging::{Conversation, Inbox, Message};
use brocante_core::session::User;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.toml");

/// On-disk layout of a catalog fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub conversations: Vec<Conversation>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// A catalog loaded from a TOML fixture.
///
/// Responsibilities:
/// - Parse and validate the fixture once at load time
/// - Serve items, categories and cities from memory
/// - Append published items back to the fixture file
pub struct TomlCatalogRepository {
    file: Option<AtomicTomlFile<CatalogFile>>,
    catalog: Catalog,
    users: Vec<User>,
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
}

impl TomlCatalogRepository {
    /// Loads the fixture at `path`. A blank file is an empty catalog.
    pub fn load(path: PathBuf) -> Result<Self> {
        let file = AtomicTomlFile::<CatalogFile>::new(path);
        if !file.exists() {
            return Err(BrocanteError::not_found(
                "catalog file",
                file.path().display().to_string(),
            ));
        }
        let data = file.load()?.unwrap_or_default();

        let repository = Self::from_file(data, Some(file))?;
        tracing::info!(
            "Loaded {} items in {} categories",
            repository.catalog.items.len(),
            repository.catalog.categories.len()
        );
        Ok(repository)
    }

    /// The built-in sample catalog. Published items stay in memory.
    pub fn sample() -> Result<Self> {
        Self::parse(SAMPLE_CATALOG)
    }

    /// Parses fixture text without backing it by a file.
    pub fn parse(content: &str) -> Result<Self> {
        let data: CatalogFile = toml::from_str(content)
            .map_err(|e| BrocanteError::config(format!("invalid catalog: {}", e)))?;
        Self::from_file(data, None)
    }

    fn from_file(data: CatalogFile, file: Option<AtomicTomlFile<CatalogFile>>) -> Result<Self> {
        let catalog = Catalog::new(data.items, data.categories, data.cities);
        catalog.validate()?;

        for item in uncategorized(&catalog) {
            tracing::warn!(
                "Item {} has unknown category '{}'; it will not match any category filter",
                item.id,
                item.category
            );
        }

        Ok(Self {
            file,
            catalog,
            users: data.users,
            conversations: data.conversations,
            messages: data.messages,
        })
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(AtomicTomlFile::path)
    }

    /// Known user profiles.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Inbox seeded from the fixture's conversations and messages.
    pub fn inbox(&self) -> Inbox {
        Inbox::from_parts(self.conversations.clone(), self.messages.clone())
    }
}

/// Items whose category label names no category exactly, as the filter
/// compares it.
fn uncategorized(catalog: &Catalog) -> impl Iterator<Item = &Item> {
    catalog.items.iter().filter(|item| {
        !catalog
            .categories
            .iter()
            .any(|category| category.name == item.category)
    })
}

impl CatalogRepository for TomlCatalogRepository {
    fn items(&self) -> &[Item] {
        self.catalog.items()
    }

    fn categories(&self) -> &[Category] {
        self.catalog.categories()
    }

    fn cities(&self) -> &[String] {
        self.catalog.cities()
    }

    fn publish(&mut self, item: Item) -> Result<()> {
        if self.catalog.contains(&item.id) {
            return Err(BrocanteError::validation(format!(
                "item '{}' is already listed",
                item.id
            )));
        }

        if let Some(file) = &self.file {
            let stored = item.clone();
            file.update(CatalogFile::default(), move |data| {
                data.items.push(stored);
                Ok(())
            })?;
        }

        self.catalog.publish(item)
    }
}
