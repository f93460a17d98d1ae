//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: The `User` identity
//! - `favorites`: The ordered favorites set
//! - `state`: `SessionState`, with login/logout and favorite toggling

mod favorites;
mod model;
mod state;

// Re-export public API
pub use favorites::Favorites;
pub use model::User;
pub use state::SessionState;
