//! Data loader - obtains the PhotoSet from an external source
//!
//! Loading is a single attempt. Callers that must never fail use
//! [`load_or_empty`], which turns any error into an empty set so the gallery
//! shows its empty-state message.

use std::future::Future;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::{GalleryError, GalleryResult};
use crate::photo_set::PhotoSet;
use crate::scanner::{discover_categories, scan_photos};

/// Anything that can produce a PhotoSet
pub trait PhotoSource {
    fn load(&self) -> impl Future<Output = GalleryResult<PhotoSet>> + Send;
}

/// Reads a JSON manifest file
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PhotoSource for ManifestSource {
    async fn load(&self) -> GalleryResult<PhotoSet> {
        let json = tokio::fs::read_to_string(&self.path).await?;
        let photos = PhotoSet::from_json(&json)?;
        info!(
            "Loaded {} photos in {} categories from {}",
            photos.photo_count(),
            photos.category_count(),
            self.path.display()
        );
        Ok(photos)
    }
}

/// Scans the photos folder on every load
#[derive(Debug, Clone)]
pub struct DirectorySource {
    photos_dir: PathBuf,
    categories: Option<Vec<String>>,
}

impl DirectorySource {
    /// Scan `categories` in order, or every sub-folder when `None`
    pub fn new(photos_dir: impl Into<PathBuf>, categories: Option<Vec<String>>) -> Self {
        Self {
            photos_dir: photos_dir.into(),
            categories,
        }
    }
}

impl PhotoSource for DirectorySource {
    async fn load(&self) -> GalleryResult<PhotoSet> {
        let photos_dir = self.photos_dir.clone();
        let categories = self.categories.clone();

        tokio::task::spawn_blocking(move || {
            let categories = match categories {
                Some(categories) => categories,
                None => discover_categories(&photos_dir)?,
            };
            scan_photos(&photos_dir, &categories)
        })
        .await
        .map_err(|e| GalleryError::Io(std::io::Error::other(e.to_string())))?
    }
}

/// Load once; on any failure log it and return an empty set
pub async fn load_or_empty<S: PhotoSource>(source: &S) -> PhotoSet {
    match source.load().await {
        Ok(photos) => photos,
        Err(e) => {
            warn!("Error loading photos: {}", e);
            PhotoSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_manifest_source_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("photos.json");
        fs::write(&path, r#"{"Korean": ["kimchi.jpg"], "Fusion": []}"#).unwrap();

        let photos = ManifestSource::new(&path).load().await.unwrap();
        assert_eq!(photos.category_count(), 2);
        assert_eq!(photos.files("Korean").unwrap(), &["kimchi.jpg".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_manifest_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = ManifestSource::new(dir.path().join("photos.json"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, GalleryError::Io(_)));
    }

    #[tokio::test]
    async fn test_load_or_empty_swallows_failures() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("photos.json");
        fs::write(&path, r#"{"Korean": "kimchi.jpg"}"#).unwrap();

        let photos = load_or_empty(&ManifestSource::new(&path)).await;
        assert!(photos.is_empty());
    }

    #[tokio::test]
    async fn test_directory_source_discovers_categories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Drinks")).unwrap();
        fs::create_dir_all(dir.path().join("Chinese")).unwrap();
        fs::write(dir.path().join("Drinks").join("chai.png"), b"png").unwrap();

        let photos = DirectorySource::new(dir.path(), None).load().await.unwrap();
        let names: Vec<&str> = photos.category_names().collect();
        assert_eq!(names, vec!["Chinese", "Drinks"]);
        assert_eq!(photos.photo_count(), 1);
    }
}
