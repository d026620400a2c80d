//! charla-store
//!
//! The chat message store: an owned, observable list of messages that
//! can mirror itself into a key-value slot and restore from it on
//! startup. Storage failures are logged and never reach the caller.

pub mod config;
pub mod error;
pub mod persistence;
pub mod store;
pub mod subscribers;

pub use charla_core::{ChatStoreState, Locale, Message, MessagePatch, MessageState, Role};
pub use config::StoreConfig;
pub use error::ConfigError;
pub use persistence::{Ephemeral, Persisted, SnapshotSlot};
pub use store::MessageStore;
pub use subscribers::SubscriptionId;
