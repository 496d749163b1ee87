use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use url::Url;

use crate::url_validation::validate_http_url;

pub const DEFAULT_BUCKET: &str = "ispeak-products";
pub const DEFAULT_MANIFEST_PATH: &str = "uploaded_urls.json";
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";
pub const DEFAULT_LOCAL_STORAGE_URL: &str = "http://localhost:3000/storage";
const THUMBNAILS_DIR_NAME: &str = "thumbnails";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendConfig {
    Supabase { project_url: Url, api_key: String },
    Local { base_dir: PathBuf, base_url: String },
}

/// Settings for one upload run. Built once at startup and only read afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploaderConfig {
    pub backend: BackendConfig,
    pub bucket: String,
    pub image_dir: PathBuf,
    pub thumbnail_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub content_type: String,
}

impl UploaderConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let backend = match var("STORAGE_BACKEND").as_deref().unwrap_or("supabase") {
            "supabase" => {
                let raw_url = var("SUPABASE_URL").context("SUPABASE_URL is not set")?;
                let project_url = validate_http_url(&raw_url).context("SUPABASE_URL is invalid")?;
                let api_key = var("SUPABASE_KEY").context("SUPABASE_KEY is not set")?;
                BackendConfig::Supabase {
                    project_url,
                    api_key,
                }
            }
            "local" => BackendConfig::Local {
                base_dir: var("LOCAL_STORAGE_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(default_local_storage_dir),
                base_url: var("LOCAL_STORAGE_URL")
                    .unwrap_or_else(|| DEFAULT_LOCAL_STORAGE_URL.to_string()),
            },
            other => bail!("unknown STORAGE_BACKEND '{other}', expected 'supabase' or 'local'"),
        };

        let image_dir = var("IMAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_image_dir);
        let thumbnail_dir = var("THUMBNAIL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| image_dir.join(THUMBNAILS_DIR_NAME));

        Ok(Self {
            backend,
            bucket: var("STORAGE_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            image_dir,
            thumbnail_dir,
            manifest_path: var("MANIFEST_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_PATH)),
            content_type: var("UPLOAD_CONTENT_TYPE")
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
        })
    }
}

fn default_image_dir() -> PathBuf {
    let mut base = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push("iSPEAK");
    base.push("ISPEAK_PRODUCT_IMAGES");
    base.push("web-optimized");
    base
}

fn default_local_storage_dir() -> PathBuf {
    let mut base = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push("ispeak-uploader");
    base
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn supabase_backend_uses_fixed_defaults() {
        let config = UploaderConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_KEY", "secret"),
            ("IMAGE_DIR", "/data/web-optimized"),
        ]))
        .unwrap();

        assert_eq!(config.bucket, "ispeak-products");
        assert_eq!(config.content_type, "image/jpeg");
        assert_eq!(config.manifest_path, PathBuf::from("uploaded_urls.json"));
        assert_eq!(config.thumbnail_dir, PathBuf::from("/data/web-optimized/thumbnails"));
        assert!(matches!(
            config.backend,
            BackendConfig::Supabase { ref api_key, .. } if api_key == "secret"
        ));
    }

    #[test]
    fn supabase_backend_requires_credentials() {
        let err = UploaderConfig::from_lookup(lookup(&[("SUPABASE_URL", "https://p.supabase.co")]))
            .unwrap_err();
        assert!(err.to_string().contains("SUPABASE_KEY"));

        let err = UploaderConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "ftp://p.supabase.co"),
            ("SUPABASE_KEY", "secret"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("SUPABASE_URL"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = UploaderConfig::from_lookup(lookup(&[
            ("STORAGE_BACKEND", "local"),
            ("LOCAL_STORAGE_DIR", "/srv/mirror"),
            ("STORAGE_BUCKET", "   "),
            ("THUMBNAIL_DIR", "/srv/thumbs"),
        ]))
        .unwrap();

        assert_eq!(config.bucket, DEFAULT_BUCKET);
        assert_eq!(config.thumbnail_dir, PathBuf::from("/srv/thumbs"));
        assert_eq!(
            config.backend,
            BackendConfig::Local {
                base_dir: PathBuf::from("/srv/mirror"),
                base_url: DEFAULT_LOCAL_STORAGE_URL.to_string(),
            }
        );
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(UploaderConfig::from_lookup(lookup(&[("STORAGE_BACKEND", "s3")])).is_err());
    }
}
