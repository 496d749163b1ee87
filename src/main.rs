use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ispeak_image_uploader::{
    default_catalog, ManifestBuilder, Storage, UploaderConfig, Uploader,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = UploaderConfig::from_env()?;
    info!(
        bucket = %config.bucket,
        image_dir = %config.image_dir.display(),
        "starting product image upload"
    );

    let storage = Storage::from_config(&config);
    let uploader = Uploader::new(storage, config.content_type.clone());
    let builder = ManifestBuilder::new(
        uploader,
        config.image_dir.clone(),
        config.thumbnail_dir.clone(),
    );
    builder.run(&default_catalog(), &config.manifest_path).await?;
    Ok(())
}
