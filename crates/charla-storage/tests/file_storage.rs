use charla_storage::{FileStorage, KeyValueStore, StorageError};

#[test]
fn missing_key_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    assert!(storage.get("chat_history").unwrap().is_none());
}

#[test]
fn set_then_get_returns_the_value() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path().join("nested"));
    assert_eq!(storage.root(), dir.path().join("nested"));

    storage.set("chat_history", r#"{"messages":[]}"#).unwrap();
    assert_eq!(
        storage.get("chat_history").unwrap().as_deref(),
        Some(r#"{"messages":[]}"#)
    );
    assert!(dir.path().join("nested").join("chat_history.json").exists());
}

#[test]
fn set_overwrites_and_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());

    storage.set("k", "first").unwrap();
    storage.set("k", "second").unwrap();

    assert_eq!(storage.get("k").unwrap().as_deref(), Some("second"));
    assert!(!dir.path().join("k.json.tmp").exists());
}

#[cfg(unix)]
#[test]
fn written_files_are_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());
    storage.set("k", "v").unwrap();

    let mode = std::fs::metadata(dir.path().join("k.json"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn remove_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());

    storage.set("k", "v").unwrap();
    storage.remove("k").unwrap();
    storage.remove("k").unwrap();
    assert!(storage.get("k").unwrap().is_none());
}

#[test]
fn path_like_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());

    for key in ["../escape", "a/b", ""] {
        assert!(matches!(
            storage.set(key, "v"),
            Err(StorageError::InvalidKey { .. })
        ));
        assert!(matches!(
            storage.get(key),
            Err(StorageError::InvalidKey { .. })
        ));
    }
}

#[test]
fn failed_rename_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());

    // A non-empty directory where the slot file belongs makes the rename fail.
    let blocker = dir.path().join("k.json");
    std::fs::create_dir(&blocker).unwrap();
    std::fs::write(blocker.join("keep"), "x").unwrap();

    assert!(matches!(storage.set("k", "v"), Err(StorageError::Io(_))));
    assert!(!dir.path().join("k.json.tmp").exists());
}
