//! Messaging domain module.
//!
//! Conversations between buyers and sellers, held in memory. Sending is a
//! local state change with no delivery behind it.

mod inbox;
mod model;

pub use inbox::Inbox;
pub use model::{Conversation, ItemRef, Message, Participant};
