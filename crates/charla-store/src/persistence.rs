use charla_core::{keys, ChatStoreState};
use charla_storage::state::{load_snapshot, remove_snapshot, save_snapshot};
use charla_storage::KeyValueStore;

/// Where a store mirrors its snapshot between runs.
///
/// Implementations swallow their own failures: `restore` reports a
/// broken slot as empty and `persist` logs write errors.
pub trait SnapshotSlot {
    fn restore(&self) -> Option<ChatStoreState>;

    fn persist(&mut self, state: &ChatStoreState);
}

/// No persistence. Every store starts from the greeting.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ephemeral;

impl SnapshotSlot for Ephemeral {
    fn restore(&self) -> Option<ChatStoreState> {
        None
    }

    fn persist(&mut self, _state: &ChatStoreState) {}
}

/// Mirrors the snapshot into one key of a [`KeyValueStore`].
#[derive(Debug)]
pub struct Persisted<K> {
    storage: K,
    key: String,
}

impl<K: KeyValueStore> Persisted<K> {
    /// Persist under the default `chat_history` key.
    pub fn new(storage: K) -> Self {
        Self::with_key(storage, keys::CHAT_HISTORY)
    }

    pub fn with_key(storage: K, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    pub fn into_inner(self) -> K {
        self.storage
    }

    /// Remove the slot entirely. Failures are logged, not returned.
    pub fn clear(&mut self) {
        match remove_snapshot(&mut self.storage, &self.key) {
            Ok(()) => tracing::debug!(key = %self.key, "chat history removed"),
            Err(e) => tracing::warn!(
                error = %e,
                key = %self.key,
                "failed to remove chat history"
            ),
        }
    }
}

impl<K: KeyValueStore> SnapshotSlot for Persisted<K> {
    fn restore(&self) -> Option<ChatStoreState> {
        match load_snapshot(&self.storage, &self.key) {
            Ok(Some(state)) => {
                tracing::debug!(
                    key = %self.key,
                    messages = state.len(),
                    "chat history restored"
                );
                Some(state)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    key = %self.key,
                    "failed to restore chat history, using default"
                );
                None
            }
        }
    }

    fn persist(&mut self, state: &ChatStoreState) {
        match save_snapshot(&mut self.storage, &self.key, state) {
            Ok(()) => tracing::debug!(
                key = %self.key,
                messages = state.len(),
                "chat history saved"
            ),
            // In-memory state stays authoritative; the next write retries.
            Err(e) => tracing::warn!(
                error = %e,
                key = %self.key,
                "failed to save chat history"
            ),
        }
    }
}
