//! Edge case tests for the gallery controller
//!
//! These drive the controller the way a UI adapter would and check the
//! state that comes back.

use stallgallery_core::{
    ClickTarget, GalleryController, GalleryError, GalleryView, PhotoSet, ViewerState,
    CANCEL_KEY, EMPTY_GALLERY_MESSAGE,
};

fn market() -> PhotoSet {
    PhotoSet::new()
        .with_category("Desserts", ["tart.jpg", "mochi.png", "a.b.jpg"])
        .with_category("Drinks", ["chai.jpg"])
        .with_category("Indian", Vec::<String>::new())
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_load_failure_shows_single_message() {
    let mut controller = GalleryController::default();
    controller.load_finished(Err(GalleryError::ManifestShape("expected a map".into())));

    assert!(controller.gallery().cards().is_empty());
    assert_eq!(
        controller.gallery().view(),
        GalleryView::Empty(EMPTY_GALLERY_MESSAGE)
    );
}

#[test]
fn test_rerender_discards_previous_cards() {
    let mut controller = GalleryController::default();
    controller.load_finished(Ok(market()));
    let old_ids: Vec<_> = controller.gallery().cards().iter().map(|c| c.id()).collect();

    let replacement = PhotoSet::new().with_category("Korean", ["bibimbap.jpg"]);
    controller.load_finished(Ok(replacement));

    let cards = controller.gallery().cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].category(), "Korean");
    for id in old_ids {
        assert!(controller.gallery().card(id).is_none());
    }

    // Filtering only sees the new cards
    controller.select_category("Desserts");
    assert_eq!(controller.gallery().visible_cards().count(), 0);
}

#[test]
fn test_display_names() {
    let mut controller = GalleryController::default();
    controller.load_finished(Ok(market()));
    let names: Vec<&str> = controller
        .gallery()
        .cards()
        .iter()
        .map(|c| c.display_name())
        .collect();
    assert_eq!(names, vec!["tart", "mochi", "a.b", "chai"]);
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_filter_multi_card_category() {
    let mut controller = GalleryController::default();
    controller.load_finished(Ok(market()));

    controller.select_category("Desserts");
    let visible: Vec<&str> = controller
        .gallery()
        .visible_cards()
        .map(|c| c.filename())
        .collect();
    assert_eq!(visible, vec!["tart.jpg", "mochi.png", "a.b.jpg"]);
}

#[test]
fn test_filter_category_without_cards() {
    let mut controller = GalleryController::default();
    controller.load_finished(Ok(market()));

    controller.select_category("Indian");
    assert_eq!(controller.gallery().visible_cards().count(), 0);

    controller.select_category("all");
    assert_eq!(controller.gallery().visible_cards().count(), 4);
}

// ============================================================================
// Viewer
// ============================================================================

#[test]
fn test_viewer_full_cycle() {
    let mut controller = GalleryController::default();
    controller.load_finished(Ok(market()));
    let tart = controller.gallery().cards()[0].id();
    let chai = controller.gallery().cards()[3].id();

    controller.select_card(tart);
    assert!(controller.viewer().is_scroll_locked());

    // Frame clicks stay open
    assert!(!controller.viewer_click(ClickTarget::Frame));
    assert!(controller.viewer().is_open());

    // Selecting another card swaps content
    controller.select_card(chai);
    assert_eq!(controller.viewer().current().unwrap().caption, "chai");

    // Backdrop closes
    assert!(controller.viewer_click(ClickTarget::Backdrop));
    assert_eq!(controller.viewer().state(), &ViewerState::Closed);
    assert!(!controller.viewer().is_scroll_locked());

    // Cancel key while closed does nothing
    assert!(!controller.key_pressed(CANCEL_KEY));
    assert!(!controller.close_viewer());
}

#[test]
fn test_cancel_key_closes() {
    let mut controller = GalleryController::default();
    controller.load_finished(Ok(market()));
    let mochi = controller.gallery().cards()[1].id();
    controller.select_card(mochi);

    assert!(controller.key_pressed(CANCEL_KEY));
    assert!(!controller.viewer().is_open());
    assert!(!controller.viewer().is_scroll_locked());
}

#[test]
fn test_scroll_lock_tracks_open_state() {
    let mut controller = GalleryController::default();
    controller.load_finished(Ok(market()));
    let ids: Vec<_> = controller.gallery().cards().iter().map(|c| c.id()).collect();

    for id in ids {
        controller.select_card(id);
        assert_eq!(controller.viewer().is_open(), controller.viewer().is_scroll_locked());
        controller.viewer_click(ClickTarget::Frame);
        assert_eq!(controller.viewer().is_open(), controller.viewer().is_scroll_locked());
        controller.viewer_click(ClickTarget::CloseButton);
        assert_eq!(controller.viewer().is_open(), controller.viewer().is_scroll_locked());
    }
}
