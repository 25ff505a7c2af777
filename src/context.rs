//! Controller context for Stall Gallery.
//!
//! Provides the GalleryController signal to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| controller);
//!
//! // In child components
//! let mut controller = use_controller();
//! controller.write().select_category("Desserts");
//! ```

use dioxus::prelude::*;
use stallgallery_core::GalleryController;

use crate::AppSettings;

/// Get the settings resolved from the command line.
pub fn get_settings() -> AppSettings {
    crate::get_settings()
}

/// Hook to access the gallery controller from context.
///
/// Reads subscribe the calling component to controller changes; event
/// handlers mutate it through `write()`.
pub fn use_controller() -> Signal<GalleryController> {
    use_context::<Signal<GalleryController>>()
}
