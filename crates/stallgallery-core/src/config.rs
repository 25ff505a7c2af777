//! Gallery configuration
//!
//! Every path is derived from a single site root: photos live under
//! `<root>/photos/<Category>/` and the manifest is `<root>/photos.json`.

use std::path::{Path, PathBuf};

use crate::error::GalleryResult;
use crate::scanner::discover_categories;

/// Category folders scanned when none are configured explicitly
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Chinese", "Desserts", "Drinks", "Fusion", "Indian", "Japanese", "Korean", "Western",
];

/// Name of the photos folder under the site root
pub const PHOTOS_DIR_NAME: &str = "photos";

/// Name of the manifest file under the site root
pub const MANIFEST_FILE_NAME: &str = "photos.json";

/// Where the gallery lives and how it is scanned
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Site root containing `photos/` and `photos.json`
    pub root: PathBuf,
    /// Categories to scan, in display order. `None` means discover folders.
    pub categories: Option<Vec<String>>,
}

impl GalleryConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            categories: Some(DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()),
        }
    }

    /// Use the given categories, or discover them from the photos folder
    pub fn with_categories(mut self, categories: Option<Vec<String>>) -> Self {
        self.categories = categories;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn photos_dir(&self) -> PathBuf {
        self.root.join(PHOTOS_DIR_NAME)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE_NAME)
    }

    /// The configured categories, or the sub-folders of the photos directory
    pub fn resolve_categories(&self) -> GalleryResult<Vec<String>> {
        match &self.categories {
            Some(categories) => Ok(categories.clone()),
            None => discover_categories(&self.photos_dir()),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
