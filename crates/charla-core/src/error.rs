use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}
