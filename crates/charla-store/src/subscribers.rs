use std::collections::BTreeMap;
use std::fmt;

use charla_core::ChatStoreState;

/// Callback invoked with the full snapshot after every change.
pub type Callback = Box<dyn FnMut(&ChatStoreState)>;

/// Handle returned by `subscribe`; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Registry of snapshot listeners keyed by their handle.
///
/// Ids are never reused within one registry.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    callbacks: BTreeMap<SubscriptionId, Callback>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.insert(id, callback);
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        self.callbacks.remove(&id).is_some()
    }

    /// Deliver `state` to a single subscriber, if it is still registered.
    pub fn notify_one(&mut self, id: SubscriptionId, state: &ChatStoreState) {
        if let Some(callback) = self.callbacks.get_mut(&id) {
            callback(state);
        }
    }

    pub fn notify(&mut self, state: &ChatStoreState) {
        for callback in self.callbacks.values_mut() {
            callback(state);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("next_id", &self.next_id)
            .field("ids", &self.callbacks.keys().collect::<Vec<_>>())
            .finish()
    }
}
