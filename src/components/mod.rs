//! UI components for Stall Gallery.
//!
//! Each component reads the shared controller from context and turns DOM
//! events into controller actions.

mod category_select;
pub mod gallery;
mod lightbox;

pub use category_select::CategorySelect;
pub use gallery::{PhotoCard, PhotoGallery};
pub use lightbox::Lightbox;
