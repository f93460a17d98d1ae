//! Messaging domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The other side of a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

/// The listing a conversation is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image: String,
}

/// A conversation summary, as listed on the messages tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub participant: Participant,
    pub item: ItemRef,
    #[serde(default)]
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
    #[serde(default)]
    pub unread_count: u32,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    /// Conversation this message belongs to
    pub conversation_id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub item_id: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
}

impl Message {
    /// Whether `user_id` wrote this message (rendered on the right).
    pub fn is_from(&self, user_id: &str) -> bool {
        self.sender_id == user_id
    }
}
