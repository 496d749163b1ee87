pub mod builder;
pub mod catalog;
pub mod config;
pub mod manifest;
pub mod mime;
pub mod report;
pub mod resolver;
pub mod storage;
pub mod uploader;
pub mod url_validation;

pub use builder::ManifestBuilder;
pub use catalog::{default_catalog, CatalogEntry};
pub use config::{BackendConfig, UploaderConfig};
pub use manifest::{Manifest, ProductImages};
pub use report::RunReport;
pub use storage::{LocalFileStorage, ObjectStore, Storage, StorageError, SupabaseStorage};
pub use uploader::{UploadOutcome, Uploader};
