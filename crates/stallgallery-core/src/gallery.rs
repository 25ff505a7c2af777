//! Gallery renderer - turns a PhotoSet into the current set of cards
//!
//! Every render pass fully replaces the previous cards and bumps the
//! generation, so card handles held from an earlier pass stop resolving.

use tracing::{debug, info};

use crate::card::{Card, CardId};
use crate::filter::CategoryFilter;
use crate::photo_set::PhotoSet;

/// Message shown instead of cards when there is nothing to display
pub const EMPTY_GALLERY_MESSAGE: &str = "No photos to display yet. Add photos to get started!";

/// What the gallery region should show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GalleryView<'a> {
    /// No render pass has happened yet
    Loading,
    /// Rendered, but zero cards
    Empty(&'static str),
    /// Rendered cards in display order (hidden ones included)
    Cards(&'a [Card]),
}

/// Rendered gallery state
#[derive(Debug, Default)]
pub struct Gallery {
    generation: u64,
    cards: Vec<Card>,
    categories: Vec<String>,
    filter: CategoryFilter,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all cards with those built from `photos`.
    ///
    /// Categories are walked in order, filenames in list order, and the card
    /// index keeps counting across category boundaries. The active filter is
    /// reset so every new card starts visible. Returns the card count.
    pub fn render(&mut self, photos: &PhotoSet) -> usize {
        self.generation += 1;
        let generation = self.generation;

        self.cards = photos
            .entries()
            .enumerate()
            .map(|(index, (category, filename))| {
                Card::build(category, filename, index).in_generation(generation)
            })
            .collect();
        self.categories = photos.category_names().map(str::to_string).collect();
        self.filter = CategoryFilter::All;

        info!(
            generation,
            cards = self.cards.len(),
            categories = self.categories.len(),
            "Gallery rendered"
        );
        self.cards.len()
    }

    pub fn view(&self) -> GalleryView<'_> {
        if self.generation == 0 {
            GalleryView::Loading
        } else if self.cards.is_empty() {
            GalleryView::Empty(EMPTY_GALLERY_MESSAGE)
        } else {
            GalleryView::Cards(&self.cards)
        }
    }

    /// Number of completed render passes
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.is_visible())
    }

    /// Category names of the last rendered set, in display order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Resolve a handle against the current render pass
    pub fn card(&self, id: CardId) -> Option<&Card> {
        if id.generation != self.generation {
            return None;
        }
        self.cards.get(id.index)
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Show only cards matching `value` (or all for the sentinel).
    ///
    /// Returns the number of visible cards.
    pub fn apply_filter(&mut self, value: &str) -> usize {
        self.filter = CategoryFilter::parse(value);
        let visible = self.filter.apply(&mut self.cards);
        debug!(filter = %self.filter, visible, "Filter applied");
        visible
    }

    /// Record that a card's photo failed to load.
    ///
    /// Returns true if the card switched to the placeholder; false for stale
    /// handles or cards already showing it.
    pub fn image_failed(&mut self, id: CardId) -> bool {
        if id.generation != self.generation {
            return false;
        }
        match self.cards.get_mut(id.index) {
            Some(card) => {
                let changed = card.mark_image_failed();
                if changed {
                    debug!(image = card.image_location(), "Photo failed to load, using placeholder");
                }
                changed
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ImageSource;

    fn sample() -> PhotoSet {
        PhotoSet::new()
            .with_category("Chinese", ["bao.jpg", "dumpling.jpg"])
            .with_category("Desserts", ["tart.jpg"])
            .with_category("Drinks", Vec::<String>::new())
    }

    #[test]
    fn test_initial_view_is_loading() {
        let gallery = Gallery::new();
        assert_eq!(gallery.view(), GalleryView::Loading);
    }

    #[test]
    fn test_render_indexes_across_categories() {
        let mut gallery = Gallery::new();
        assert_eq!(gallery.render(&sample()), 3);

        let indices: Vec<usize> = gallery.cards().iter().map(Card::index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(gallery.cards()[2].category(), "Desserts");
        assert_eq!(gallery.categories(), &["Chinese", "Desserts", "Drinks"]);
    }

    #[test]
    fn test_render_empty_shows_message() {
        let mut gallery = Gallery::new();
        gallery.render(&PhotoSet::new());
        assert_eq!(gallery.view(), GalleryView::Empty(EMPTY_GALLERY_MESSAGE));

        let only_empty = PhotoSet::new().with_category("Drinks", Vec::<String>::new());
        gallery.render(&only_empty);
        assert_eq!(gallery.view(), GalleryView::Empty(EMPTY_GALLERY_MESSAGE));
    }

    #[test]
    fn test_render_resets_filter() {
        let mut gallery = Gallery::new();
        gallery.render(&sample());
        gallery.apply_filter("Desserts");
        gallery.render(&sample());
        assert_eq!(gallery.filter(), &CategoryFilter::All);
        assert_eq!(gallery.visible_cards().count(), 3);
    }

    #[test]
    fn test_stale_handles_do_not_resolve() {
        let mut gallery = Gallery::new();
        gallery.render(&sample());
        let old = gallery.cards()[0].id();

        gallery.render(&sample());
        assert!(gallery.card(old).is_none());
        assert!(!gallery.image_failed(old));
        assert!(gallery.card(gallery.cards()[0].id()).is_some());
    }

    #[test]
    fn test_image_failure_is_scoped_to_one_card() {
        let mut gallery = Gallery::new();
        gallery.render(&sample());
        let id = gallery.cards()[1].id();

        assert!(gallery.image_failed(id));
        assert!(!gallery.image_failed(id));
        assert_eq!(gallery.cards()[1].source(), &ImageSource::Placeholder);
        assert_eq!(gallery.cards()[0].source(), &ImageSource::Photo);
        assert_eq!(gallery.cards()[2].source(), &ImageSource::Photo);
    }
}
