pub mod error;
pub mod local;
pub mod supabase;

pub use error::StorageError;
pub use local::LocalFileStorage;
pub use supabase::SupabaseStorage;

use crate::config::{BackendConfig, UploaderConfig};

/// Remote object storage as seen by the uploader.
#[allow(async_fn_in_trait)]
pub trait ObjectStore {
    /// Stores `data` under `key`. With `upsert` unset an existing object is a conflict.
    async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), StorageError>;

    fn public_url(&self, key: &str) -> Result<String, StorageError>;
}

/// Backend chosen at startup from [`UploaderConfig`].
#[derive(Clone, Debug)]
pub enum Storage {
    Supabase(SupabaseStorage),
    Local(LocalFileStorage),
}

impl Storage {
    pub fn from_config(config: &UploaderConfig) -> Self {
        match &config.backend {
            BackendConfig::Supabase {
                project_url,
                api_key,
            } => Storage::Supabase(SupabaseStorage::new(
                project_url.clone(),
                api_key.clone(),
                config.bucket.clone(),
            )),
            BackendConfig::Local { base_dir, base_url } => Storage::Local(LocalFileStorage::new(
                base_dir.join(&config.bucket),
                format!("{}/{}", base_url.trim_end_matches('/'), config.bucket),
            )),
        }
    }
}

impl ObjectStore for Storage {
    async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), StorageError> {
        match self {
            Storage::Supabase(store) => store.upload(key, data, content_type, upsert).await,
            Storage::Local(store) => store.upload(key, data, content_type, upsert).await,
        }
    }

    fn public_url(&self, key: &str) -> Result<String, StorageError> {
        match self {
            Storage::Supabase(store) => store.public_url(key),
            Storage::Local(store) => store.public_url(key),
        }
    }
}

/// Strips leading slashes and rejects keys that are empty or climb out of the bucket.
pub fn normalize_key(key: &str) -> Result<&str, StorageError> {
    let normalized = key.trim_start_matches('/');
    if normalized.is_empty() || normalized.split('/').any(|segment| segment == "..") {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(normalized)
}

/// Collapses doubled schemes such as `http://https://` left behind by env values.
pub fn normalize_base_url(raw: &str) -> String {
    let mut base = raw.trim().trim_end_matches('/').to_string();
    loop {
        let collapsed = if base.starts_with("http://http://") {
            base.replacen("http://http://", "http://", 1)
        } else if base.starts_with("https://https://") {
            base.replacen("https://https://", "https://", 1)
        } else if base.starts_with("http://https://") {
            base.replacen("http://https://", "https://", 1)
        } else if base.starts_with("https://http://") {
            base.replacen("https://http://", "http://", 1)
        } else {
            break;
        };
        base = collapsed;
    }
    base
}
