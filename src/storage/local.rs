use std::path::{Path, PathBuf};

use tokio::fs;

use super::{normalize_base_url, normalize_key, ObjectStore, StorageError};

/// Directory-backed store that mirrors the bucket layout on disk.
#[derive(Clone, Debug)]
pub struct LocalFileStorage {
    base_dir: PathBuf,
    base_url: String,
}

impl LocalFileStorage {
    pub fn new(base_dir: PathBuf, base_url: String) -> Self {
        Self {
            base_dir,
            base_url: normalize_base_url(&base_url),
        }
    }

    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.resolve_path(normalize_key(key)?);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let path = self.resolve_path(normalize_key(key)?);
        match fs::metadata(path).await {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    pub fn resolve_path(&self, key: &str) -> PathBuf {
        let normalized = key.trim_start_matches('/');
        self.base_dir.join(Path::new(normalized))
    }
}

impl ObjectStore for LocalFileStorage {
    async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        _content_type: &str,
        upsert: bool,
    ) -> Result<(), StorageError> {
        let key = normalize_key(key)?;
        if !upsert && self.exists(key).await? {
            return Err(StorageError::AlreadyExists(key.to_string()));
        }
        let path = self.resolve_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, data).await?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> Result<String, StorageError> {
        let key = normalize_key(key)?;
        Ok(format!("{}/{key}", self.base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(dir: &Path) -> LocalFileStorage {
        LocalFileStorage::new(dir.join("ispeak-products"), "http://localhost:3000/storage/".into())
    }

    #[tokio::test]
    async fn upload_writes_object_and_overwrites_on_upsert() {
        let dir = tempfile::tempdir().unwrap();
        let store = storage(dir.path());

        store.upload("main/a.jpg", b"one".to_vec(), "image/jpeg", true).await.unwrap();
        store.upload("main/a.jpg", b"two".to_vec(), "image/jpeg", true).await.unwrap();

        assert_eq!(store.get("main/a.jpg").await.unwrap(), Some(b"two".to_vec()));
        assert!(dir.path().join("ispeak-products/main/a.jpg").is_file());
    }

    #[tokio::test]
    async fn upload_without_upsert_refuses_existing_object() {
        let dir = tempfile::tempdir().unwrap();
        let store = storage(dir.path());

        store.upload("main/a.jpg", b"one".to_vec(), "image/jpeg", false).await.unwrap();
        let err = store
            .upload("main/a.jpg", b"two".to_vec(), "image/jpeg", false)
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::AlreadyExists(key) if key == "main/a.jpg"));
    }

    #[tokio::test]
    async fn get_missing_object_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(storage(dir.path()).get("thumbnails/none.jpg").await.unwrap(), None);
    }

    #[test]
    fn public_url_joins_base_and_key() {
        let store = storage(Path::new("/tmp"));
        assert_eq!(
            store.public_url("/main/a.jpg").unwrap(),
            "http://localhost:3000/storage/main/a.jpg"
        );
    }
}
