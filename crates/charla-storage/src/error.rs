use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid slot key: {key:?}")]
    InvalidKey { key: String },

    #[error("stored value for {key} has no `messages` array")]
    InvalidShape { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
