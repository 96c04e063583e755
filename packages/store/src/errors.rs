use thiserror::Error;

/// Failure while reading or writing the persisted session token.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("token storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to access the token file: {0}")]
    Io(#[from] std::io::Error),
    #[error("refusing to store an empty token")]
    EmptyToken,
}
