//! Stall Gallery Core Library
//!
//! Filterable photo gallery with a lightbox viewer, independent of any
//! rendering environment.
//!
//! ## Overview
//!
//! A gallery is driven by a [`PhotoSet`]: an ordered mapping from category
//! name to the photo filenames in that category. The [`GalleryController`]
//! turns a loaded set into cards, filters them by category and runs the
//! lightbox state machine. UI layers translate their events into controller
//! actions and render whatever state comes back.
//!
//! ## Quick Start
//!
//! ```ignore
//! use stallgallery_core::{load_or_empty, GalleryController, ManifestSource};
//!
//! let mut controller = GalleryController::new(true);
//! let photos = load_or_empty(&ManifestSource::new("photos.json")).await;
//! controller.load_finished(Ok(photos));
//!
//! controller.select_category("Desserts");
//! let first = controller.gallery().cards()[0].id();
//! controller.select_card(first);
//! assert!(controller.viewer().is_open());
//!
//! controller.key_pressed("Escape");
//! assert!(!controller.viewer().is_open());
//! ```
//!
//! ## Tooling
//!
//! - [`scanner`]: builds the manifest from `photos/<Category>/` folders
//! - [`compress`]: shrinks photos for web delivery

pub mod card;
pub mod compress;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod loader;
pub mod photo_set;
pub mod scanner;
pub mod viewer;

// Re-exports
pub use card::{display_name, image_location, Card, CardId, ImageSource, PLACEHOLDER_CAPTION};
pub use compress::{compress_all, compress_image, CompressOptions, CompressionReport, CompressionStats};
pub use config::{GalleryConfig, DEFAULT_CATEGORIES};
pub use controller::GalleryController;
pub use error::{GalleryError, GalleryResult};
pub use filter::{CategoryFilter, ALL_CATEGORIES};
pub use gallery::{Gallery, GalleryView, EMPTY_GALLERY_MESSAGE};
pub use loader::{load_or_empty, DirectorySource, ManifestSource, PhotoSource};
pub use photo_set::{Category, PhotoSet};
pub use scanner::{discover_categories, is_supported_image, scan_photos, write_manifest};
pub use viewer::{ClickTarget, Selection, Viewer, ViewerState, CANCEL_KEY};
