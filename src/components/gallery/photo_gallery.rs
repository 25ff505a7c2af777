//! Photo Gallery Component
//!
//! Grid of photo cards, or the empty-state message.

use dioxus::prelude::*;
use stallgallery_core::GalleryView;

use super::PhotoCard;
use crate::context::use_controller;

/// Photo grid driven by the gallery controller
///
/// Cards are keyed by render generation and index, so a new render replaces
/// every card instead of patching the old ones.
#[component]
pub fn PhotoGallery() -> Element {
    let controller = use_controller();
    let controller = controller.read();

    let content = match controller.gallery().view() {
        GalleryView::Loading => rsx! {
            div { id: "gallery", class: "gallery",
                p { class: "gallery__message", "Setting out the stall..." }
            }
        },
        GalleryView::Empty(message) => rsx! {
            div { id: "gallery", class: "gallery",
                p { class: "gallery__message", "{message}" }
            }
        },
        GalleryView::Cards(cards) => rsx! {
            div { id: "gallery", class: "gallery",
                for card in cards.iter() {
                    PhotoCard {
                        key: "{card.id().generation}-{card.index()}",
                        card: card.clone(),
                    }
                }
            }
        },
    };
    content
}
