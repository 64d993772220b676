mod common;

use callisto_core::geom::{Point, Rect};
use callisto_core::viewport::scroll::{clamp_offset, scroll_region};
use callisto_core::viewport::zoom::{zoom, ZoomDirection};

use common::make_state;

#[test]
fn test_region_is_image_for_interior_view() {
    let image = Rect::from_size(1000.0, 800.0);
    let visible = Rect::new(100.0, 150.0, 500.0, 450.0);
    assert_eq!(scroll_region(image, visible), image);
}

#[test]
fn test_region_grows_when_view_hangs_off_edge() {
    let image = Rect::from_size(1000.0, 800.0);
    let visible = Rect::new(650.0, 0.0, 1050.0, 300.0);
    let region = scroll_region(image, visible);
    assert_eq!(region, Rect::new(0.0, 0.0, 1050.0, 800.0));
}

#[test]
fn test_region_collapses_on_spanned_axis() {
    // Image narrower than the view: the union spans the visible box
    // horizontally, so the bound falls back to the image's own extent.
    let image = Rect::from_size(200.0, 800.0);
    let visible = Rect::new(0.0, 100.0, 400.0, 400.0);
    let region = scroll_region(image, visible);
    assert_eq!(region.left, 0.0);
    assert_eq!(region.right, 200.0);
    assert_eq!(region.top, 0.0);
    assert_eq!(region.bottom, 800.0);
}

#[test]
fn test_clamp_saturates_at_region_edges() {
    let region = Rect::from_size(1000.0, 800.0);
    let clamped = clamp_offset(region, 400.0, 300.0, Point::new(700.0, -50.0));
    assert_eq!(clamped, Point::new(600.0, 0.0));
}

#[test]
fn test_clamp_pins_when_region_smaller_than_view() {
    let region = Rect::from_size(200.0, 150.0);
    let clamped = clamp_offset(region, 400.0, 300.0, Point::new(50.0, 50.0));
    assert_eq!(clamped, Point::new(0.0, 0.0));
}

/// The scroll offset stays inside the legal range after any sequence of
/// gesture events.
#[test]
fn test_offset_contained_after_event_sequence() {
    let mut state = make_state(1000, 800, 400.0, 300.0);

    let assert_contained = |state: &callisto_core::viewport::ViewportState| {
        let region = state.scroll_region();
        let max_x = (region.right - state.view_width).max(region.left);
        let max_y = (region.bottom - state.view_height).max(region.top);
        assert!(
            state.offset.x >= region.left && state.offset.x <= max_x,
            "offset.x {} outside [{}, {}]",
            state.offset.x,
            region.left,
            max_x
        );
        assert!(
            state.offset.y >= region.top && state.offset.y <= max_y,
            "offset.y {} outside [{}, {}]",
            state.offset.y,
            region.top,
            max_y
        );
    };

    state.set_offset(Point::new(500.0, 400.0));
    assert_contained(&state);

    zoom(&mut state, ZoomDirection::Out, Some(Point::new(200.0, 150.0)));
    assert_contained(&state);

    zoom(&mut state, ZoomDirection::Out, None);
    assert_contained(&state);

    state.resize(900.0, 700.0);
    assert_contained(&state);

    state.set_offset(Point::new(-300.0, 5000.0));
    assert_contained(&state);

    zoom(&mut state, ZoomDirection::In, Some(Point::new(10.0, 10.0)));
    assert_contained(&state);
}

#[test]
fn test_one_pixel_image_not_draggable_in_oversized_view() {
    let mut state = make_state(1, 600, 400.0, 300.0);
    // The collapse rule keeps the sliver pinned no matter what is asked.
    let applied = state.set_offset(Point::new(-250.0, 0.0));
    assert_eq!(applied.x, 0.0);
    let applied = state.set_offset(Point::new(250.0, 0.0));
    assert_eq!(applied.x, 0.0);
}
