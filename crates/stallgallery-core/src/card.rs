//! Photo cards - one renderable unit per (category, filename) pair
//!
//! Cards are rebuilt on every render pass. Each carries its derived display
//! name, its image location, and the image fallback state.

use std::sync::OnceLock;
use std::time::Duration;

use base64::Engine;

use crate::viewer::Selection;

/// Delay between consecutive card entrances on a full render
pub const ENTRANCE_STAGGER: Duration = Duration::from_millis(60);

/// Caption shown inside the fallback image
pub const PLACEHOLDER_CAPTION: &str = "Photo not available";

/// Stable handle to a card within one render pass.
///
/// Handles from an earlier render never match cards of a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId {
    pub generation: u64,
    pub index: usize,
}

/// Where a card's image currently comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// The photo at the card's image location
    Photo,
    /// The photo failed to load; the inline placeholder is shown instead
    Placeholder,
}

/// A rendered photo card
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    id: CardId,
    category: String,
    filename: String,
    display_name: String,
    image_location: String,
    source: ImageSource,
    visible: bool,
    entrance_delay: Duration,
}

impl Card {
    /// Build the card for one photo at the given position in the render pass
    pub fn build(category: &str, filename: &str, index: usize) -> Self {
        Self {
            id: CardId { generation: 0, index },
            category: category.to_string(),
            filename: filename.to_string(),
            display_name: display_name(filename).to_string(),
            image_location: image_location(category, filename),
            source: ImageSource::Photo,
            visible: true,
            entrance_delay: ENTRANCE_STAGGER * index as u32,
        }
    }

    pub(crate) fn in_generation(mut self, generation: u64) -> Self {
        self.id.generation = generation;
        self
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn index(&self) -> usize {
        self.id.index
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Path of the photo, regardless of fallback state
    pub fn image_location(&self) -> &str {
        &self.image_location
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Cosmetic entrance delay
    pub fn entrance_delay(&self) -> Duration {
        self.entrance_delay
    }

    /// The image the card displays right now
    pub fn resolved_src(&self) -> &str {
        match self.source {
            ImageSource::Photo => &self.image_location,
            ImageSource::Placeholder => placeholder_data_uri(),
        }
    }

    /// Swap to the placeholder after the photo failed to load.
    ///
    /// Returns false if the placeholder was already in use. There is no way
    /// back to the photo within the same render pass.
    pub fn mark_image_failed(&mut self) -> bool {
        if self.source == ImageSource::Placeholder {
            return false;
        }
        self.source = ImageSource::Placeholder;
        true
    }

    /// What the viewer should show when this card is selected
    pub fn selection(&self) -> Selection {
        Selection {
            image: self.resolved_src().to_string(),
            caption: self.display_name.clone(),
        }
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn set_entrance_delay(&mut self, delay: Duration) {
        self.entrance_delay = delay;
    }
}

/// Filename without its final extension.
///
/// Only a non-empty extension is stripped, so `"a.b.jpg"` becomes `"a.b"`
/// and `".jpg"` becomes `""`, while `"no_extension"` and `"a."` are
/// returned unchanged.
pub fn display_name(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(pos) if pos + 1 < filename.len() && !filename[pos + 1..].contains('/') => {
            &filename[..pos]
        }
        _ => filename,
    }
}

/// Relative location of a photo
pub fn image_location(category: &str, filename: &str) -> String {
    format!("photos/{}/{}", category, filename)
}

/// Inline SVG shown in place of a photo that failed to load
pub fn placeholder_data_uri() -> &'static str {
    static URI: OnceLock<String> = OnceLock::new();
    URI.get_or_init(|| {
        let svg = format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="250" height="250">"#,
                r##"<rect fill="#f5e6d3" width="250" height="250"/>"##,
                r##"<text x="50%" y="50%" text-anchor="middle" dy=".3em" fill="#6b5d4d" "##,
                r#"font-family="Outfit, sans-serif" font-size="14">{}</text></svg>"#
            ),
            PLACEHOLDER_CAPTION
        );
        let encoded = base64::engine::general_purpose::STANDARD.encode(svg);
        format!("data:image/svg+xml;base64,{}", encoded)
    })
}
