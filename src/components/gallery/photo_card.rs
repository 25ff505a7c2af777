//! Photo Card Component
//!
//! Polaroid-style card with image, dish name and category badge.

use dioxus::prelude::*;
use stallgallery_core::Card;

use crate::context::use_controller;

/// A single photo card
///
/// Clicking opens the lightbox with whatever image the card currently shows.
/// If the photo fails to load the card switches to the inline placeholder.
#[component]
pub fn PhotoCard(
    /// Card state from the current render pass
    card: Card,
) -> Element {
    let mut controller = use_controller();
    let id = card.id();

    let class = if card.is_visible() { "photo-card" } else { "photo-card hidden" };
    let style = format!(
        "--rotation: {:.2}deg; --tape-rotation: {:.2}deg; --badge-rotation: {:.2}deg; animation-delay: {:.2}s;",
        tilt(card.index(), 4.0),
        tilt(card.index() + 3, 8.0),
        tilt(card.index() + 7, 4.0),
        card.entrance_delay().as_secs_f32(),
    );

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            "data-category": "{card.category()}",
            onclick: move |_| {
                controller.write().select_card(id);
            },

            img {
                src: "{card.resolved_src()}",
                alt: "{card.display_name()}",
                loading: "lazy",
                onerror: move |_| {
                    controller.write().image_failed(id);
                },
            }

            div { class: "photo-caption",
                h3 { "{card.display_name()}" }
                p { class: "photo-category", "{card.category()}" }
            }
        }
    }
}

/// Scattered-polaroid tilt in `[-max, max]` degrees, stable per position
fn tilt(index: usize, max: f32) -> f32 {
    let step = (index.wrapping_mul(7919) % 17) as f32 / 16.0;
    (step * 2.0 - 1.0) * max
}
