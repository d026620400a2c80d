use charla_store::{ConfigError, Locale, StoreConfig};

#[test]
fn empty_object_yields_defaults() {
    let config: StoreConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, StoreConfig::default());
    assert_eq!(config.storage_key, "chat_history");
    assert_eq!(config.locale, Locale::Es);
    assert!(config.storage_dir.is_none());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings").join("store.json");
    let config = StoreConfig {
        storage_dir: Some(dir.path().join("data")),
        storage_key: "support_chat".to_string(),
        locale: Locale::En,
    };

    config.save(&path).unwrap();
    assert_eq!(StoreConfig::load(&path).unwrap(), config);
    assert_eq!(config.resolve_storage_dir().unwrap(), dir.path().join("data"));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StoreConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn path_like_storage_key_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{"storage_key":"../outside"}"#).unwrap();

    assert!(matches!(
        StoreConfig::load(&path),
        Err(ConfigError::InvalidKey(_))
    ));
}

#[test]
fn unknown_locale_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{"locale":"fr"}"#).unwrap();

    assert!(matches!(
        StoreConfig::load(&path),
        Err(ConfigError::Serialization(_))
    ));
}

#[test]
fn region_tagged_locale_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{"locale":"es-MX"}"#).unwrap();

    assert_eq!(StoreConfig::load(&path).unwrap().locale, Locale::Es);
}
