//! Category Select Component
//!
//! Dropdown that filters the gallery by category.

use dioxus::prelude::*;
use stallgallery_core::ALL_CATEGORIES;

use crate::context::use_controller;

/// Category filter dropdown
///
/// Options come from the last rendered photo set; the first option shows
/// every category.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CategorySelect {}
/// }
/// ```
#[component]
pub fn CategorySelect() -> Element {
    let mut controller = use_controller();

    let (categories, selected) = {
        let controller = controller.read();
        let gallery = controller.gallery();
        (gallery.categories().to_vec(), gallery.filter().as_str().to_string())
    };

    rsx! {
        label { class: "category-filter",
            span { class: "category-filter__label", "Browse by cuisine" }
            select {
                id: "category-select",
                class: "category-filter__select",
                value: "{selected}",
                onchange: move |evt| {
                    controller.write().select_category(&evt.value());
                },

                option { value: ALL_CATEGORIES, selected: selected == ALL_CATEGORIES, "All dishes" }
                for category in categories.iter() {
                    option {
                        key: "{category}",
                        value: "{category}",
                        selected: selected == *category,
                        "{category}"
                    }
                }
            }
        }
    }
}
