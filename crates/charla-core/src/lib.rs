//! charla-core
//!
//! Pure domain types for the chat store: messages, patches, snapshots,
//! locale greetings and the storage slot key. No I/O happens here.

pub mod error;
pub mod keys;
pub mod locale;
pub mod models;

pub use error::CoreError;
pub use locale::Locale;
pub use models::message::{Message, MessagePatch, MessageState, Role};
pub use models::state::ChatStoreState;
