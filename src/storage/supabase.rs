use reqwest::{header::CONTENT_TYPE, Client, Response};
use url::Url;

use super::{normalize_key, ObjectStore, StorageError};

/// Client for the Supabase Storage REST API, scoped to one bucket.
#[derive(Clone, Debug)]
pub struct SupabaseStorage {
    client: Client,
    project_url: Url,
    api_key: String,
    bucket: String,
}

impl SupabaseStorage {
    pub fn new(project_url: Url, api_key: String, bucket: String) -> Self {
        Self {
            client: Client::new(),
            project_url,
            api_key,
            bucket,
        }
    }

    /// `route` sits between `/storage/v1/object` and the bucket; key segments are percent-encoded.
    fn object_url(&self, route: Option<&str>, key: &str) -> Result<Url, StorageError> {
        let key = normalize_key(key)?;
        let mut url = self.project_url.clone();
        url.path_segments_mut()
            .map_err(|_| StorageError::InvalidKey(key.to_string()))?
            .pop_if_empty()
            .extend(["storage", "v1", "object"])
            .extend(route)
            .push(&self.bucket)
            .extend(key.split('/'));
        Ok(url)
    }
}

async fn assert_ok_response(response: Response) -> Result<Response, StorageError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(StorageError::Status { status, body })
}

impl ObjectStore for SupabaseStorage {
    async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), StorageError> {
        let response = self
            .client
            .post(self.object_url(None, key)?)
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", if upsert { "true" } else { "false" })
            .body(data)
            .send()
            .await?;
        assert_ok_response(response).await?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> Result<String, StorageError> {
        Ok(self.object_url(Some("public"), key)?.into())
    }
}
