//! Catalog domain module.
//!
//! # Module Structure
//!
//! - `model`: Items, categories, conditions and icons
//! - `criteria`: Filter criteria and selection toggles
//! - `filter`: The catalog filter and city picker search
//! - `repository`: Catalog source trait and the in-memory catalog
//! - `draft`: Drafts from the posting form
//!
//! # Usage
//!
//! ```ignore
//! use brocante_core::catalog::{filter, FilterCriteria, Catalog, CatalogRepository};
//! ```

mod criteria;
mod draft;
mod filter;
mod model;
mod repository;

// Re-export public API
pub use criteria::FilterCriteria;
pub use draft::ItemDraft;
pub use filter::{Matcher, featured, filter, filter_iter, search_cities};
pub use model::{Category, CategoryIcon, Condition, Item, SellerRef};
pub use repository::{Catalog, CatalogRepository};
