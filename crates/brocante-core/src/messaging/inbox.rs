use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

use super::model::{Conversation, Message};
use crate::error::{BrocanteError, Result};

/// In-memory conversations and their message histories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inbox {
    conversations: Vec<Conversation>,
    messages: HashMap<String, Vec<Message>>,
}

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inbox from seed data. Messages are grouped by conversation
    /// and kept in the order given.
    pub fn from_parts(conversations: Vec<Conversation>, messages: Vec<Message>) -> Self {
        let mut grouped: HashMap<String, Vec<Message>> = HashMap::new();
        for message in messages {
            grouped
                .entry(message.conversation_id.clone())
                .or_default()
                .push(message);
        }

        Self {
            conversations,
            messages: grouped,
        }
    }

    /// Conversations in display order.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// History of a conversation, oldest first. Unknown ids have no messages.
    pub fn messages(&self, conversation_id: &str) -> &[Message] {
        self.messages
            .get(conversation_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total unread messages across conversations.
    pub fn unread_total(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread_count).sum()
    }

    /// Sends `content` from `sender_id` into the conversation.
    ///
    /// # Errors
    ///
    /// - Validation error when the content is blank; nothing is recorded.
    /// - NotFound when the conversation does not exist.
    pub fn send(
        &mut self,
        conversation_id: &str,
        sender_id: &str,
        content: &str,
        sent_at: DateTime<Utc>,
    ) -> Result<Message> {
        let content = content.trim();
        if content.is_empty() {
            return Err(BrocanteError::validation("message is empty"));
        }

        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| BrocanteError::not_found("conversation", conversation_id))?;

        let message = Message {
            id: Uuid::new_v4().to_string(),
            conversation_id: conversation_id.to_string(),
            sender_id: sender_id.to_string(),
            receiver_id: conversation.participant.id.clone(),
            item_id: conversation.item.id.clone(),
            content: content.to_string(),
            sent_at,
            is_read: true,
        };

        conversation.last_message = message.content.clone();
        conversation.last_message_at = sent_at;

        self.messages
            .entry(conversation_id.to_string())
            .or_default()
            .push(message.clone());

        tracing::debug!("Sent message {} in conversation {}", message.id, conversation_id);
        Ok(message)
    }

    /// Marks a conversation as read.
    pub fn mark_read(&mut self, conversation_id: &str) -> Result<()> {
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| BrocanteError::not_found("conversation", conversation_id))?;
        conversation.unread_count = 0;

        if let Some(messages) = self.messages.get_mut(conversation_id) {
            for message in messages {
                message.is_read = true;
            }
        }
        Ok(())
    }
}
