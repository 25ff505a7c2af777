//! Theme for Stall Gallery.

mod styles;

pub use styles::GLOBAL_STYLES;
