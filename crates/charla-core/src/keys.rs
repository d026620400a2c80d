//! Storage slot key conventions.
//!
//! The store mirrors its whole snapshot into a single key-value entry.
//! Backends decide how a key maps onto their medium.

/// Key of the slot holding the JSON-encoded `ChatStoreState`.
pub const CHAT_HISTORY: &str = "chat_history";

/// Whether `key` is usable as a slot name on every backend.
///
/// File-backed storage turns keys into file names, so separators and
/// parent references are refused everywhere for consistency.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key != "."
        && !key.contains("..")
        && !key.contains('/')
        && !key.contains('\\')
        && !key.contains('\0')
}
