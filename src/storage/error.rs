use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("file read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("storage responded {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("object '{0}' already exists")]
    AlreadyExists(String),
    #[error("invalid object key '{0}'")]
    InvalidKey(String),
}
