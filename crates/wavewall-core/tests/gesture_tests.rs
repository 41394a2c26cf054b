// Host-side tests for swipe classification and the pointer gesture tracker.

use glam::Vec2;
use std::f64::consts::PI;
use wavewall_core::*;

#[test]
fn cardinal_drags_map_to_directions() {
    let cases = [
        (Vec2::new(0.0, 10.0), SwipeDirection::Down),
        (Vec2::new(10.0, 0.0), SwipeDirection::Right),
        (Vec2::new(0.0, -10.0), SwipeDirection::Up),
        (Vec2::new(-10.0, 0.0), SwipeDirection::Left),
    ];
    for (translation, expected) in cases {
        let angle = swipe_angle(translation);
        assert_eq!(classify_angle(angle), Some(expected), "{translation:?}");
    }
}

#[test]
fn boundary_angles_follow_half_open_ranges() {
    assert_eq!(classify_angle(-EIGHTH_TURN), Some(SwipeDirection::Down));
    assert_eq!(classify_angle(EIGHTH_TURN), Some(SwipeDirection::Right));
    assert_eq!(classify_angle(THREE_EIGHTHS_TURN), Some(SwipeDirection::Up));
    assert_eq!(classify_angle(-THREE_EIGHTHS_TURN), Some(SwipeDirection::Left));
    assert_eq!(classify_angle(PI), Some(SwipeDirection::Up));
    assert_eq!(classify_angle(-PI), Some(SwipeDirection::Up));
    assert_eq!(classify_angle(0.0), Some(SwipeDirection::Down));
}

#[test]
fn angles_just_inside_each_range() {
    let e = 1e-9;
    assert_eq!(classify_angle(EIGHTH_TURN - e), Some(SwipeDirection::Down));
    assert_eq!(classify_angle(THREE_EIGHTHS_TURN - e), Some(SwipeDirection::Right));
    assert_eq!(classify_angle(-THREE_EIGHTHS_TURN - e), Some(SwipeDirection::Up));
    assert_eq!(classify_angle(-EIGHTH_TURN - e), Some(SwipeDirection::Left));
}

#[test]
fn classification_is_total_over_the_circle() {
    let steps = 10_000;
    for i in 0..steps {
        let angle = -PI + 2.0 * PI * i as f64 / steps as f64;
        assert!(classify_angle(angle).is_some(), "no direction for {angle}");
    }
}

#[test]
fn nan_and_out_of_range_angles_are_ignored() {
    assert_eq!(classify_angle(f64::NAN), None);
    assert_eq!(classify_angle(PI + 0.1), None);
    assert_eq!(classify_angle(-PI - 0.1), None);
}

#[test]
fn small_travel_is_a_tap() {
    let mut tracker = GestureTracker::default();
    tracker.press(Vec2::new(100.0, 100.0));
    tracker.moved(Vec2::new(101.0, 101.0));
    let g = tracker.release(Vec2::new(101.5, 101.0));
    assert_eq!(g, Some(Gesture::Tap { at: Vec2::new(100.0, 100.0) }));
    assert!(!tracker.is_pressed());
}

#[test]
fn travel_past_threshold_becomes_a_drag() {
    let mut tracker = GestureTracker::default();
    tracker.press(Vec2::new(50.0, 50.0));
    tracker.moved(Vec2::new(50.0, 53.0));
    let g = tracker.release(Vec2::new(50.0, 60.0));
    assert_eq!(
        g,
        Some(Gesture::DragEnded {
            start: Vec2::new(50.0, 50.0),
            translation: Vec2::new(0.0, 10.0),
        })
    );
}

#[test]
fn drag_that_returns_near_start_still_counts() {
    let mut tracker = GestureTracker::default();
    tracker.press(Vec2::ZERO);
    tracker.moved(Vec2::new(40.0, 0.0));
    match tracker.release(Vec2::new(1.0, 0.0)) {
        Some(Gesture::DragEnded { translation, .. }) => assert_eq!(translation, Vec2::new(1.0, 0.0)),
        other => panic!("expected drag, got {other:?}"),
    }
}

#[test]
fn release_without_press_yields_nothing() {
    let mut tracker = GestureTracker::default();
    assert_eq!(tracker.release(Vec2::new(3.0, 3.0)), None);
    tracker.press(Vec2::ZERO);
    tracker.cancel();
    assert_eq!(tracker.release(Vec2::new(30.0, 0.0)), None);
}
