use std::path::{Path, PathBuf};

use tokio::fs;

/// Marker dropped from an expected filename when the exact name is missing.
pub const FALLBACK_MARKER: &str = "-REAL";
pub const THUMBNAIL_SUFFIX: &str = "_thumb";
pub const THUMBNAIL_EXTENSION: &str = "jpg";

/// An image located on disk together with the filename it was found under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedImage {
    pub path: PathBuf,
    pub filename: String,
}

/// Looks for `expected` under `dir`, then for the same name without the `-REAL` marker.
pub async fn resolve_main_image(dir: &Path, expected: &str) -> Option<ResolvedImage> {
    if let Some(found) = find_file(dir, expected).await {
        return Some(found);
    }
    let fallback = fallback_filename(expected)?;
    find_file(dir, &fallback).await
}

/// Thumbnails have no fallback name.
pub async fn resolve_thumbnail(dir: &Path, main_filename: &str) -> Option<ResolvedImage> {
    find_file(dir, &thumbnail_filename(main_filename)).await
}

/// `None` when the name carries no marker, since the fallback would be the same file.
pub fn fallback_filename(expected: &str) -> Option<String> {
    expected
        .contains(FALLBACK_MARKER)
        .then(|| expected.replace(FALLBACK_MARKER, ""))
}

pub fn thumbnail_filename(main_filename: &str) -> String {
    let stem = Path::new(main_filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(main_filename);
    format!("{stem}{THUMBNAIL_SUFFIX}.{THUMBNAIL_EXTENSION}")
}

async fn find_file(dir: &Path, filename: &str) -> Option<ResolvedImage> {
    let path = dir.join(filename);
    match fs::metadata(&path).await {
        Ok(metadata) if metadata.is_file() => Some(ResolvedImage {
            path,
            filename: filename.to_string(),
        }),
        _ => None,
    }
}
