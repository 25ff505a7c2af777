use dioxus::prelude::*;
use stallgallery_core::{load_or_empty, DirectorySource, GalleryController, ManifestSource};

use crate::components::{CategorySelect, Lightbox, PhotoGallery};
use crate::context::get_settings;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the gallery controller, loads the photos once on mount, and routes
/// document-level key presses to the viewer.
#[component]
pub fn App() -> Element {
    let mut controller: Signal<GalleryController> = use_signal(|| GalleryController::new(true));

    use_context_provider(|| controller);

    // Single load on mount; failures fall back to the empty gallery
    use_effect(move || {
        spawn(async move {
            let settings = get_settings();
            let photos = if settings.live {
                let gallery = &settings.gallery;
                load_or_empty(&DirectorySource::new(
                    gallery.photos_dir(),
                    gallery.categories.clone(),
                ))
                .await
            } else {
                load_or_empty(&ManifestSource::new(settings.manifest.clone())).await
            };
            controller.write().load_finished(Ok(photos));
        });
    });

    let scroll_locked = controller.read().viewer().is_scroll_locked();

    rsx! {
        style { {GLOBAL_STYLES} }
        if scroll_locked {
            style { "body {{ overflow: hidden; }}" }
        }

        // Focusable root stands in for a document-level keydown listener;
        // key events from focused children bubble up here
        div {
            class: "stall",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |evt: KeyboardEvent| {
                controller.write().key_pressed(&evt.key().to_string());
            },

            header { class: "stall-header",
                h1 { class: "stall-title", "Artisan Market Stall" }
                p { class: "stall-tagline", "Handmade dishes, photographed fresh from the stall" }
                CategorySelect {}
            }

            main { class: "stall-main",
                PhotoGallery {}
            }

            Lightbox {}
        }
    }
}
