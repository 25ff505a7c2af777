//! Photo scanner - builds the manifest from category folders
//!
//! Layout on disk:
//!
//! ```text
//! photos/
//! ├── Chinese/
//! │   ├── bao.jpg
//! │   └── dumpling.png
//! └── Desserts/
//!     └── tart.webp
//! ```

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{GalleryError, GalleryResult};
use crate::photo_set::PhotoSet;

/// File extensions (lowercase) treated as photos
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Whether the path has a supported photo extension (case-insensitive)
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Scan the given categories under `photos_dir`, in order.
///
/// A missing category folder contributes an empty list. Files are sorted by
/// name; anything without a supported extension is skipped.
pub fn scan_photos<S: AsRef<str>>(photos_dir: &Path, categories: &[S]) -> GalleryResult<PhotoSet> {
    if !photos_dir.is_dir() {
        return Err(GalleryError::PhotosDirMissing(photos_dir.to_path_buf()));
    }

    let mut photos = PhotoSet::new();
    for category in categories {
        let category = category.as_ref();
        let category_path = photos_dir.join(category);

        if !category_path.is_dir() {
            warn!("{} folder not found, skipping", category);
            photos.insert(category, Vec::new());
            continue;
        }

        let files = scan_category(&category_path)?;
        info!("Found {} photos in {}", files.len(), category);
        photos.insert(category, files);
    }

    Ok(photos)
}

fn scan_category(category_path: &Path) -> GalleryResult<Vec<String>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(category_path)? {
        let path = entry?.path();
        if !path.is_file() || !is_supported_image(&path) {
            continue;
        }
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => files.push(name.to_string()),
            None => warn!("Skipping photo with non UTF-8 name: {:?}", path),
        }
    }
    files.sort();
    Ok(files)
}

/// Sub-folders of `photos_dir`, sorted alphabetically
pub fn discover_categories(photos_dir: &Path) -> GalleryResult<Vec<String>> {
    if !photos_dir.is_dir() {
        return Err(GalleryError::PhotosDirMissing(photos_dir.to_path_buf()));
    }

    let mut categories = Vec::new();
    for entry in fs::read_dir(photos_dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            categories.push(name.to_string());
        }
    }
    categories.sort();
    Ok(categories)
}

/// Write the manifest as pretty-printed JSON
pub fn write_manifest(photos: &PhotoSet, path: &Path) -> GalleryResult<()> {
    fs::write(path, photos.to_json_pretty()?)?;
    info!(
        "Wrote {} with {} total photos",
        path.display(),
        photos.photo_count()
    );
    Ok(())
}
