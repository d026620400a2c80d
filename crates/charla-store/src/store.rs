use charla_core::{ChatStoreState, Locale, Message, MessagePatch};
use charla_storage::{FileStorage, KeyValueStore};

use crate::config::StoreConfig;
use crate::error::ConfigError;
use crate::persistence::{Ephemeral, Persisted, SnapshotSlot};
use crate::subscribers::{Subscribers, SubscriptionId};

/// An observable, optionally persisted list of chat messages.
///
/// Every mutation replaces the snapshot, writes it to the slot (best
/// effort) and then hands it to every subscriber. None of the mutating
/// operations can fail.
#[derive(Debug)]
pub struct MessageStore<S = Ephemeral> {
    state: ChatStoreState,
    locale: Locale,
    slot: S,
    subscribers: Subscribers,
}

impl MessageStore<Ephemeral> {
    /// An in-memory store starting from the greeting for `locale`.
    pub fn new(locale: Locale) -> Self {
        Self::with_slot(Ephemeral, locale)
    }
}

impl Default for MessageStore<Ephemeral> {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl<K: KeyValueStore> MessageStore<Persisted<K>> {
    /// A store mirrored into `storage` under the `chat_history` key.
    pub fn persistent(storage: K, locale: Locale) -> Self {
        Self::with_slot(Persisted::new(storage), locale)
    }

    /// Remove the persisted slot and go back to the greeting.
    pub fn clear_storage(&mut self) {
        self.slot.clear();
        self.state = ChatStoreState::greeting(self.locale);
        tracing::debug!(key = %self.slot.key(), "chat history cleared");
        self.subscribers.notify(&self.state);
    }
}

impl MessageStore<Persisted<FileStorage>> {
    /// Open the file-backed store described by `config`.
    ///
    /// Only resolving the storage directory can fail; a missing or
    /// unreadable history falls back to the greeting.
    pub fn open(config: &StoreConfig) -> Result<Self, ConfigError> {
        let dir = config.resolve_storage_dir()?;
        tracing::info!(path = %dir.display(), key = %config.storage_key, "opening chat store");
        let slot = Persisted::with_key(FileStorage::new(dir), config.storage_key.clone());
        Ok(Self::with_slot(slot, config.locale))
    }
}

impl<S: SnapshotSlot> MessageStore<S> {
    /// Build a store over `slot`, adopting whatever it holds.
    pub fn with_slot(slot: S, locale: Locale) -> Self {
        let state = slot.restore().unwrap_or_else(|| {
            tracing::info!(%locale, "no stored chat history, starting with greeting");
            ChatStoreState::greeting(locale)
        });

        Self {
            state,
            locale,
            slot,
            subscribers: Subscribers::new(),
        }
    }

    /// Register `callback`. It runs right away with the current snapshot
    /// and again after every mutation until unsubscribed.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ChatStoreState) + 'static,
    {
        let id = self.subscribers.insert(Box::new(callback));
        self.subscribers.notify_one(id, &self.state);
        id
    }

    /// Returns `false` if `id` was not (or no longer) registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn add_message(&mut self, message: Message) {
        self.state.messages.push(message);
        self.commit();
    }

    /// Merge `patch` into the most recent message. No-op on an empty store.
    pub fn update_last_message(&mut self, patch: MessagePatch) {
        match self.state.last_mut() {
            Some(last) => patch.apply_to(last),
            None => tracing::debug!("update_last_message on empty store ignored"),
        }
        self.commit();
    }

    /// Drop every message, including the greeting.
    pub fn reset(&mut self) {
        self.state.messages.clear();
        self.commit();
    }

    pub fn state(&self) -> &ChatStoreState {
        &self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.state.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.state.last()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn commit(&mut self) {
        self.slot.persist(&self.state);
        self.subscribers.notify(&self.state);
    }
}
