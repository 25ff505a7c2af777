//! Gallery controller - single owner of gallery and viewer state
//!
//! UI adapters translate their events into these actions and re-render from
//! [`GalleryController::gallery`] and [`GalleryController::viewer`].

use tracing::{debug, warn};

use crate::card::CardId;
use crate::error::GalleryResult;
use crate::gallery::Gallery;
use crate::photo_set::PhotoSet;
use crate::viewer::{ClickTarget, Viewer};

#[derive(Debug)]
pub struct GalleryController {
    gallery: Gallery,
    viewer: Viewer,
    filtering_enabled: bool,
}

impl GalleryController {
    /// Create a controller.
    ///
    /// `filtering_enabled` reflects whether the host provides a category
    /// select control; without one, category selections are ignored.
    pub fn new(filtering_enabled: bool) -> Self {
        let mut viewer = Viewer::new();
        viewer.reset();
        Self {
            gallery: Gallery::new(),
            viewer,
            filtering_enabled,
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn filtering_enabled(&self) -> bool {
        self.filtering_enabled
    }

    /// Render the outcome of a load. Failures render the empty state.
    pub fn load_finished(&mut self, result: GalleryResult<PhotoSet>) -> usize {
        match result {
            Ok(photos) => self.gallery.render(&photos),
            Err(e) => {
                warn!("Error loading photos: {}", e);
                self.gallery.render(&PhotoSet::new())
            }
        }
    }

    /// Category select changed
    pub fn select_category(&mut self, value: &str) {
        if !self.filtering_enabled {
            debug!(value, "Filtering disabled, ignoring category selection");
            return;
        }
        self.gallery.apply_filter(value);
    }

    /// A card was clicked. Returns false for stale handles.
    pub fn select_card(&mut self, id: CardId) -> bool {
        match self.gallery.card(id) {
            Some(card) => {
                self.viewer.select(card.selection());
                true
            }
            None => {
                debug!(?id, "Ignoring selection of stale card");
                false
            }
        }
    }

    /// A card's photo failed to load
    pub fn image_failed(&mut self, id: CardId) -> bool {
        self.gallery.image_failed(id)
    }

    /// A click landed inside the lightbox
    pub fn viewer_click(&mut self, target: ClickTarget) -> bool {
        self.viewer.click(target)
    }

    /// A key was pressed while the document had focus
    pub fn key_pressed(&mut self, key: &str) -> bool {
        self.viewer.key_pressed(key)
    }

    pub fn close_viewer(&mut self) -> bool {
        self.viewer.close()
    }
}

impl Default for GalleryController {
    fn default() -> Self {
        Self::new(true)
    }
}
