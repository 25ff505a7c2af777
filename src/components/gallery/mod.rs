//! Gallery components
//!
//! The card grid and the individual photo cards.

mod photo_card;
mod photo_gallery;

pub use photo_card::PhotoCard;
pub use photo_gallery::PhotoGallery;
