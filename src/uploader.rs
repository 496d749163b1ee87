use std::path::Path;

use tokio::fs;
use tracing::{error, info, warn};

use crate::mime::{detect_mime_type, is_same_mime_type};
use crate::storage::{ObjectStore, StorageError};

/// Result of one best-effort upload. Failures are reported, never raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded { key: String, url: String },
    Failed { key: String, reason: String },
}

impl UploadOutcome {
    pub fn url(&self) -> Option<&str> {
        match self {
            UploadOutcome::Uploaded { url, .. } => Some(url),
            UploadOutcome::Failed { .. } => None,
        }
    }

    pub fn into_url(self) -> Option<String> {
        match self {
            UploadOutcome::Uploaded { url, .. } => Some(url),
            UploadOutcome::Failed { .. } => None,
        }
    }
}

pub struct Uploader<S> {
    store: S,
    content_type: String,
}

impl<S: ObjectStore> Uploader<S> {
    pub fn new(store: S, content_type: impl Into<String>) -> Self {
        Self {
            store,
            content_type: content_type.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads `path` and upserts it under `key`, returning the object's public URL.
    pub async fn upload_file(&self, path: &Path, key: &str) -> UploadOutcome {
        match self.try_upload(path, key).await {
            Ok(url) => {
                info!(key, "uploaded {}", path.display());
                UploadOutcome::Uploaded {
                    key: key.to_string(),
                    url,
                }
            }
            Err(err) => {
                error!(key, reason = %err, "upload failed");
                UploadOutcome::Failed {
                    key: key.to_string(),
                    reason: err.to_string(),
                }
            }
        }
    }

    async fn try_upload(&self, path: &Path, key: &str) -> Result<String, StorageError> {
        let bytes = fs::read(path).await?;
        if let Some(detected) = detect_mime_type(&bytes) {
            if !is_same_mime_type(detected, &self.content_type) {
                warn!(
                    key,
                    detected,
                    content_type = %self.content_type,
                    "file content does not match upload content type"
                );
            }
        }
        self.store.upload(key, bytes, &self.content_type, true).await?;
        self.store.public_url(key)
    }
}
