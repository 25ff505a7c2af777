//! Lightbox Component
//!
//! Full-screen viewer for the selected photo.

use dioxus::prelude::*;
use stallgallery_core::ClickTarget;

use crate::context::use_controller;

/// Modal photo viewer
///
/// Clicking the backdrop or the close button closes it; clicks on the frame
/// are stopped before they reach the backdrop.
#[component]
pub fn Lightbox() -> Element {
    let mut controller = use_controller();
    let current = controller.read().viewer().current().cloned();

    let Some(selection) = current else {
        return rsx! {
            div { id: "lightbox", class: "lightbox hidden" }
        };
    };

    rsx! {
        div {
            id: "lightbox",
            class: "lightbox",
            onclick: move |_| {
                controller.write().viewer_click(ClickTarget::Backdrop);
            },

            div {
                class: "lightbox-frame",
                onclick: move |evt| {
                    evt.stop_propagation();
                    controller.write().viewer_click(ClickTarget::Frame);
                },

                button {
                    id: "close-lightbox",
                    class: "lightbox-close",
                    "aria-label": "Close",
                    onclick: move |evt| {
                        evt.prevent_default();
                        evt.stop_propagation();
                        controller.write().viewer_click(ClickTarget::CloseButton);
                    },
                    "×"
                }

                img {
                    id: "lightbox-img",
                    src: "{selection.image}",
                    alt: "{selection.caption}",
                }

                p { id: "lightbox-caption", class: "lightbox-caption",
                    "{selection.caption}"
                }
            }
        }
    }
}
