use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, warn};

use crate::catalog::CatalogEntry;
use crate::manifest::{Manifest, ProductImages};
use crate::report::RunReport;
use crate::resolver::{resolve_main_image, resolve_thumbnail, thumbnail_filename};
use crate::storage::ObjectStore;
use crate::uploader::Uploader;

pub const MAIN_PREFIX: &str = "main";
pub const THUMBNAIL_PREFIX: &str = "thumbnails";

/// Drives one sequential pass: main images first, then thumbnails for whatever uploaded.
pub struct ManifestBuilder<S> {
    uploader: Uploader<S>,
    image_dir: PathBuf,
    thumbnail_dir: PathBuf,
}

impl<S: ObjectStore> ManifestBuilder<S> {
    pub fn new(uploader: Uploader<S>, image_dir: PathBuf, thumbnail_dir: PathBuf) -> Self {
        Self {
            uploader,
            image_dir,
            thumbnail_dir,
        }
    }

    /// Builds the manifest, writes it to `output` and logs the summary.
    /// Only a failed manifest write is returned as an error.
    pub async fn run(
        &self,
        catalog: &[CatalogEntry],
        output: &Path,
    ) -> Result<(Manifest, RunReport)> {
        let (manifest, report) = self.build(catalog).await;
        manifest.save(output).await?;
        info!("urls saved to {}", output.display());
        report.log_summary(manifest.len());
        Ok((manifest, report))
    }

    pub async fn build(&self, catalog: &[CatalogEntry]) -> (Manifest, RunReport) {
        let mut report = RunReport::start();
        let mut manifest = Manifest::new();

        info!(products = catalog.len(), "uploading main product images");
        self.upload_main_images(catalog, &mut manifest, &mut report).await;

        info!(products = manifest.len(), "uploading thumbnail images");
        self.upload_thumbnails(&mut manifest, &mut report).await;

        report.finish();
        (manifest, report)
    }

    async fn upload_main_images(
        &self,
        catalog: &[CatalogEntry],
        manifest: &mut Manifest,
        report: &mut RunReport,
    ) {
        for entry in catalog {
            let Some(image) = resolve_main_image(&self.image_dir, &entry.filename).await else {
                warn!(product = %entry.product_id, "file not found: {}", entry.filename);
                report.main_missing += 1;
                continue;
            };
            let key = format!("{MAIN_PREFIX}/{}", image.filename);
            match self.uploader.upload_file(&image.path, &key).await.into_url() {
                Some(url) => {
                    report.main_uploaded += 1;
                    manifest.insert(
                        entry.product_id.clone(),
                        ProductImages {
                            main: url,
                            filename: image.filename,
                            thumbnail: None,
                        },
                    );
                }
                None => report.main_failed += 1,
            }
        }
    }

    async fn upload_thumbnails(&self, manifest: &mut Manifest, report: &mut RunReport) {
        for (product_id, images) in manifest.iter_mut() {
            let Some(thumb) = resolve_thumbnail(&self.thumbnail_dir, &images.filename).await else {
                warn!(
                    product = %product_id,
                    "thumbnail not found: {}",
                    thumbnail_filename(&images.filename)
                );
                report.thumbnails_missing += 1;
                continue;
            };
            let key = format!("{THUMBNAIL_PREFIX}/{}", thumb.filename);
            match self.uploader.upload_file(&thumb.path, &key).await.into_url() {
                Some(url) => {
                    report.thumbnails_uploaded += 1;
                    images.thumbnail = Some(url);
                }
                None => report.thumbnails_failed += 1,
            }
        }
    }
}
