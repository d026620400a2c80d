use charla_core::ChatStoreState;

use crate::error::StorageError;
use crate::slot::KeyValueStore;

/// Load a chat snapshot from `key`.
///
/// Returns `Ok(None)` when the slot is empty. The stored JSON must be an
/// object with an array-typed `messages` field; anything else is
/// `StorageError::InvalidShape`.
pub fn load_snapshot<K: KeyValueStore + ?Sized>(
    store: &K,
    key: &str,
) -> Result<Option<ChatStoreState>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    // Parse as raw JSON so the shape check runs before the typed decode.
    let json: serde_json::Value = serde_json::from_str(&raw)?;
    if !json.get("messages").is_some_and(serde_json::Value::is_array) {
        return Err(StorageError::InvalidShape {
            key: key.to_string(),
        });
    }

    let state: ChatStoreState = serde_json::from_value(json)?;
    Ok(Some(state))
}

/// Overwrite `key` with the JSON encoding of `state`.
pub fn save_snapshot<K: KeyValueStore + ?Sized>(
    store: &mut K,
    key: &str,
    state: &ChatStoreState,
) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(state)?;
    store.set(key, &json)
}

/// Remove the snapshot at `key`, if any.
pub fn remove_snapshot<K: KeyValueStore + ?Sized>(
    store: &mut K,
    key: &str,
) -> Result<(), StorageError> {
    store.remove(key)
}
