//! In-memory conversation storage.
//!
//! The store owns every conversation record; callers only ever see clones.
//! Each operation takes the lock once, so a single get/append step is atomic,
//! but no ordering is promised between the operations of two racing calls on
//! the same conversation. Conversations are never expired automatically.

use crate::error::StoreError;
use crate::message::Message;
use chrono::{DateTime, Utc};
use helpline_core::{ConversationId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// An ordered, append-only history of messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation identifier.
    pub id: ConversationId,
    /// The user this conversation belongs to, if known.
    pub user_id: Option<UserId>,
    /// Messages in insertion order.
    pub messages: Vec<Message>,
    /// When the conversation was created.
    pub created_at: DateTime<Utc>,
    /// When a message was last appended.
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Creates a new empty conversation.
    #[must_use]
    pub fn new(id: ConversationId, user_id: Option<UserId>) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a message and refreshes `updated_at`.
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.updated_at = Utc::now();
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Returns the last message, if any.
    #[must_use]
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// In-memory keyed collection of conversations.
///
/// An explicit store object rather than process-wide state, so independent
/// instances can coexist (one per server, one per test).
#[derive(Debug, Default)]
pub struct ConversationStore {
    conversations: RwLock<HashMap<ConversationId, Conversation>>,
}

impl ConversationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing conversation for `id`, or creates a new empty
    /// one owned by `user_id`.
    ///
    /// The `user_id` is only recorded at creation; it does not overwrite the
    /// owner of an existing conversation.
    pub fn get_or_create(
        &self,
        id: &ConversationId,
        user_id: Option<UserId>,
    ) -> Result<Conversation, StoreError> {
        let mut conversations = self.write()?;
        let conversation = conversations
            .entry(id.clone())
            .or_insert_with(|| Conversation::new(id.clone(), user_id));
        Ok(conversation.clone())
    }

    /// Appends a message to the conversation and refreshes its `updated_at`.
    ///
    /// Returns the new message count. Callers must `get_or_create` first;
    /// appending to an unknown conversation fails with `NotFound`.
    pub fn append(&self, id: &ConversationId, message: Message) -> Result<usize, StoreError> {
        let mut conversations = self.write()?;
        let conversation = conversations
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;
        conversation.add_message(message);
        Ok(conversation.message_count())
    }

    /// Returns a snapshot of the conversation, if present.
    pub fn get(&self, id: &ConversationId) -> Result<Option<Conversation>, StoreError> {
        Ok(self.read()?.get(id).cloned())
    }

    /// Removes a conversation. Returns true if one existed.
    pub fn delete(&self, id: &ConversationId) -> Result<bool, StoreError> {
        Ok(self.write()?.remove(id).is_some())
    }

    /// Returns snapshots of every conversation, in no particular order.
    pub fn list_all(&self) -> Result<Vec<Conversation>, StoreError> {
        Ok(self.read()?.values().cloned().collect())
    }

    /// Returns the number of stored conversations.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    /// Returns true if the store holds no conversations.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.is_empty())
    }

    fn read(
        &self,
    ) -> Result<RwLockReadGuard<'_, HashMap<ConversationId, Conversation>>, StoreError> {
        self.conversations.read().map_err(|_| StoreError::StorageFailed {
            reason: "conversation map lock poisoned".to_string(),
        })
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<ConversationId, Conversation>>, StoreError> {
        self.conversations.write().map_err(|_| StoreError::StorageFailed {
            reason: "conversation map lock poisoned".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_create_starts_empty() {
        let store = ConversationStore::new();
        let id = ConversationId::from("c1");

        let created = store.get_or_create(&id, None).expect("create");
        assert!(created.messages.is_empty());
        assert_eq!(created.created_at, created.updated_at);

        let fetched = store.get(&id).expect("get").expect("present");
        assert!(fetched.messages.is_empty());
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[test]
    fn get_or_create_returns_existing() {
        let store = ConversationStore::new();
        let id = ConversationId::from("c1");

        store.get_or_create(&id, Some(UserId::from("alice"))).expect("create");
        store.append(&id, Message::user("hello")).expect("append");

        let again = store
            .get_or_create(&id, Some(UserId::from("bob")))
            .expect("get existing");
        assert_eq!(again.message_count(), 1);
        // The owner is fixed at creation
        assert_eq!(again.user_id, Some(UserId::from("alice")));
    }

    #[test]
    fn append_returns_count_and_refreshes_updated_at() {
        let store = ConversationStore::new();
        let id = ConversationId::from("c1");

        let created = store.get_or_create(&id, None).expect("create");
        assert_eq!(store.append(&id, Message::user("hi")).expect("append"), 1);
        assert_eq!(store.append(&id, Message::assistant("hello")).expect("append"), 2);

        let fetched = store.get(&id).expect("get").expect("present");
        assert!(fetched.updated_at >= created.created_at);
        assert_eq!(fetched.message_count(), 2);
    }

    #[test]
    fn append_to_unknown_conversation_fails() {
        let store = ConversationStore::new();
        let id = ConversationId::from("missing");

        let err = store.append(&id, Message::user("hi")).unwrap_err();
        assert_eq!(err, StoreError::NotFound { id });
    }

    #[test]
    fn messages_keep_insertion_order() {
        let store = ConversationStore::new();
        let id = ConversationId::from("c1");
        store.get_or_create(&id, None).expect("create");

        for n in 0..5 {
            store
                .append(&id, Message::user(format!("message {n}")))
                .expect("append");
        }

        let fetched = store.get(&id).expect("get").expect("present");
        let contents: Vec<_> = fetched.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["message 0", "message 1", "message 2", "message 3", "message 4"]
        );
    }

    #[test]
    fn get_unknown_returns_none() {
        let store = ConversationStore::new();
        let result = store.get(&ConversationId::from("missing")).expect("get");
        assert!(result.is_none());
    }

    #[test]
    fn delete_semantics() {
        let store = ConversationStore::new();
        let id = ConversationId::from("c1");

        assert!(!store.delete(&id).expect("delete unknown"));

        store.get_or_create(&id, None).expect("create");
        assert!(store.delete(&id).expect("delete known"));
        assert!(store.get(&id).expect("get").is_none());
        assert!(!store.delete(&id).expect("delete again"));
    }

    #[test]
    fn list_all_returns_snapshots() {
        let store = ConversationStore::new();
        store.get_or_create(&ConversationId::from("c1"), None).expect("create");
        store.get_or_create(&ConversationId::from("c2"), None).expect("create");

        let all = store.list_all().expect("list");
        assert_eq!(all.len(), 2);
        assert_eq!(store.len().expect("len"), 2);
        assert!(!store.is_empty().expect("is_empty"));
    }
}
