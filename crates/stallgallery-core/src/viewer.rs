//! Lightbox viewer state machine
//!
//! ```text
//!            select                 select (swap content)
//!   Closed ----------> Open  <-------------------+
//!     ^                 |  |                      |
//!     +-----------------+  +----------------------+
//!   close / backdrop click / cancel key
//! ```
//!
//! The background scroll lock is held exactly while the viewer is open.

use tracing::debug;

/// Key that closes an open viewer
pub const CANCEL_KEY: &str = "Escape";

/// Image and caption to show in the viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub image: String,
    pub caption: String,
}

/// Current viewer state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open(Selection),
}

/// What a click inside the lightbox landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the frame
    Backdrop,
    /// The frame holding the image and caption
    Frame,
    /// The close control
    CloseButton,
}

/// Lightbox controller
#[derive(Debug, Default)]
pub struct Viewer {
    state: ViewerState,
    scroll_locked: bool,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open(_))
    }

    /// Whether background scrolling is currently suspended
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Currently displayed selection, if open
    pub fn current(&self) -> Option<&Selection> {
        match &self.state {
            ViewerState::Open(selection) => Some(selection),
            ViewerState::Closed => None,
        }
    }

    /// Show a selection, opening the viewer or swapping its content
    pub fn select(&mut self, selection: Selection) {
        if self.is_open() {
            debug!(caption = %selection.caption, "Viewer content swapped");
        } else {
            debug!(caption = %selection.caption, "Viewer opened");
        }
        self.state = ViewerState::Open(selection);
        self.scroll_locked = true;
    }

    /// Close the viewer. Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = ViewerState::Closed;
        self.scroll_locked = false;
        debug!("Viewer closed");
        true
    }

    /// Handle a click inside the lightbox region
    pub fn click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseButton => self.close(),
            ClickTarget::Frame => false,
        }
    }

    /// Handle a key press anywhere in the document
    pub fn key_pressed(&mut self, key: &str) -> bool {
        if key == CANCEL_KEY && self.is_open() {
            return self.close();
        }
        false
    }

    /// Force the closed state and release the scroll lock
    pub fn reset(&mut self) {
        self.state = ViewerState::Closed;
        self.scroll_locked = false;
    }
}
