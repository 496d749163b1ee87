use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Public URLs recorded for one product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImages {
    pub main: String,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Product id to uploaded URLs, kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: IndexMap<String, ProductImages>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product_id: impl Into<String>, images: ProductImages) {
        self.entries.insert(product_id.into(), images);
    }

    pub fn get(&self, product_id: &str) -> Option<&ProductImages> {
        self.entries.get(product_id)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.entries.contains_key(product_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut ProductImages)> {
        self.entries.iter_mut()
    }

    pub fn product_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        let payload = serde_json::to_vec_pretty(self)?;
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(path, payload)
            .await
            .with_context(|| format!("write manifest {}", path.display()))?;
        Ok(())
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .await
            .with_context(|| format!("read manifest {}", path.display()))?;
        let manifest = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse manifest {}", path.display()))?;
        Ok(manifest)
    }
}
