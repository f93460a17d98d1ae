pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod gate;
pub mod messaging;
pub mod session;

// Re-export common types
pub use context::{AppContext, Gated, ProductView};
pub use error::BrocanteError;
