mod common;

use approx::assert_abs_diff_eq;

use callisto_core::geom::Point;
use callisto_core::viewport::zoom::{zoom, ZoomDirection, ZoomOutcome};
use callisto_core::viewport::{ViewportConfig, ViewportState};

use common::make_state;

#[test]
fn test_zoom_out_sequence_matches_multiplicative_steps() {
    let mut state = make_state(1000, 800, 400.0, 300.0);
    let center = Some(Point::new(200.0, 150.0));

    for expected in [0.75, 0.5625, 0.421875] {
        let outcome = zoom(&mut state, ZoomDirection::Out, center);
        assert_eq!(outcome, ZoomOutcome::Applied { scale: expected });
        assert_abs_diff_eq!(state.scale, expected, epsilon = 1e-12);
    }
}

#[test]
fn test_zoom_out_rejected_at_pixel_floor() {
    let mut state = make_state(1000, 800, 400.0, 300.0);
    // Anchor near the origin so the shrinking image keeps the pointer
    // over itself all the way down to the floor.
    let pointer = Some(Point::new(5.0, 5.0));

    let mut steps = 0;
    loop {
        match zoom(&mut state, ZoomDirection::Out, pointer) {
            ZoomOutcome::Applied { .. } => steps += 1,
            ZoomOutcome::Saturated => break,
            ZoomOutcome::OutsideImage => panic!("pointer left the image"),
        }
        assert!(steps < 100, "zoom-out never saturated");
    }

    // The shorter side still renders at or above the configured floor,
    // and the rejected step left the scale untouched.
    assert!(800.0 * state.scale >= state.config.min_visible_px);
    let before = state.scale;
    assert_eq!(
        zoom(&mut state, ZoomDirection::Out, pointer),
        ZoomOutcome::Saturated
    );
    assert_eq!(state.scale, before);
}

#[test]
fn test_zoom_in_rejected_at_ceiling() {
    let config = ViewportConfig {
        max_scale: 4.0,
        ..ViewportConfig::default()
    };
    let mut state = ViewportState::new(1000, 800, 400.0, 300.0, config);
    let pointer = Some(Point::new(200.0, 150.0));

    let mut saturated = false;
    for _ in 0..100 {
        if zoom(&mut state, ZoomDirection::In, pointer) == ZoomOutcome::Saturated {
            saturated = true;
            break;
        }
    }

    assert!(saturated, "zoom-in never hit the ceiling");
    assert!(state.scale <= 4.0);
}

#[test]
fn test_zoom_ignored_when_pointer_off_image() {
    // View larger than the image: plenty of dead space to point at.
    let mut state = make_state(200, 150, 800.0, 600.0);
    let before = state.clone();

    let outcome = zoom(&mut state, ZoomDirection::In, Some(Point::new(500.0, 400.0)));
    assert_eq!(outcome, ZoomOutcome::OutsideImage);
    assert_eq!(state.scale, before.scale);
    assert_eq!(state.offset, before.offset);
}

#[test]
fn test_focal_point_stays_under_pointer() {
    let mut state = make_state(1000, 800, 400.0, 300.0);
    state.set_offset(Point::new(300.0, 250.0));
    let pointer = Point::new(200.0, 150.0);

    // Image-space point under the pointer before the step.
    let before_x = (state.offset.x + pointer.x) / state.scale;
    let before_y = (state.offset.y + pointer.y) / state.scale;

    zoom(&mut state, ZoomDirection::In, Some(pointer));

    let after_x = (state.offset.x + pointer.x) / state.scale;
    let after_y = (state.offset.y + pointer.y) / state.scale;
    assert_abs_diff_eq!(before_x, after_x, epsilon = 1e-9);
    assert_abs_diff_eq!(before_y, after_y, epsilon = 1e-9);
}

#[test]
fn test_zoom_round_trip_restores_state() {
    let mut state = make_state(1000, 800, 400.0, 300.0);
    state.set_offset(Point::new(300.0, 250.0));
    let pointer = Some(Point::new(200.0, 150.0));

    let scale0 = state.scale;
    let offset0 = state.offset;

    assert!(matches!(
        zoom(&mut state, ZoomDirection::In, pointer),
        ZoomOutcome::Applied { .. }
    ));
    assert!(matches!(
        zoom(&mut state, ZoomDirection::Out, pointer),
        ZoomOutcome::Applied { .. }
    ));

    assert_abs_diff_eq!(state.scale, scale0, epsilon = 1e-12);
    assert_abs_diff_eq!(state.offset.x, offset0.x, epsilon = 1e-9);
    assert_abs_diff_eq!(state.offset.y, offset0.y, epsilon = 1e-9);
}

#[test]
fn test_missing_pointer_anchors_at_view_center() {
    let mut with_center = make_state(1000, 800, 400.0, 300.0);
    let mut with_none = with_center.clone();

    zoom(
        &mut with_center,
        ZoomDirection::Out,
        Some(Point::new(200.0, 150.0)),
    );
    zoom(&mut with_none, ZoomDirection::Out, None);

    assert_eq!(with_center.scale, with_none.scale);
    assert_eq!(with_center.offset, with_none.offset);
}

#[test]
fn test_set_scale_clamps_and_reports() {
    let mut state = make_state(1000, 800, 400.0, 300.0);

    // Below the floor: 30 / 800.
    let applied = state.set_scale(1e-6);
    assert_abs_diff_eq!(applied, 30.0 / 800.0, epsilon = 1e-12);

    // Above the ceiling.
    let applied = state.set_scale(1e6);
    assert_eq!(applied, state.config.max_scale);

    // Idempotent once clamped.
    let again = state.set_scale(applied);
    assert_eq!(again, applied);
    assert_eq!(state.scale, applied);
}
