//! Pointer gesture recognition and swipe classification.
//!
//! Frontends feed raw press/move/release positions into a [`GestureTracker`]
//! and get back at most one [`Gesture`] per release: a tap when the pointer
//! stayed within [`DRAG_MIN_DISTANCE`] of the press point, otherwise a
//! completed drag carrying its total translation.

use crate::constants::DRAG_MIN_DISTANCE;
use glam::Vec2;
use std::f64::consts::PI;

/// Lower bound of the Right range.
pub const EIGHTH_TURN: f64 = PI / 4.0;
/// Lower bound of the upper Up range.
pub const THREE_EIGHTHS_TURN: f64 = PI * 3.0 / 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    pub fn label(self) -> &'static str {
        match self {
            SwipeDirection::Up => "up",
            SwipeDirection::Down => "down",
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

/// Angle of a drag translation, measured with `atan2(dx, dy)`.
///
/// Screen y grows downward, so a straight downward drag is 0, rightward is
/// pi/2 and upward is ±pi.
#[inline]
pub fn swipe_angle(translation: Vec2) -> f64 {
    (translation.x as f64).atan2(translation.y as f64)
}

/// Map an angle in \[-pi, pi\] to a direction.
///
/// Ranges are half-open on the upper bound except Up, which owns both
/// endpoints of the circle. Anything else (NaN, out of range) is `None`.
pub fn classify_angle(angle: f64) -> Option<SwipeDirection> {
    if (-EIGHTH_TURN..EIGHTH_TURN).contains(&angle) {
        Some(SwipeDirection::Down)
    } else if (EIGHTH_TURN..THREE_EIGHTHS_TURN).contains(&angle) {
        Some(SwipeDirection::Right)
    } else if (THREE_EIGHTHS_TURN..=PI).contains(&angle) || (-PI..-THREE_EIGHTHS_TURN).contains(&angle)
    {
        Some(SwipeDirection::Up)
    } else if (-THREE_EIGHTHS_TURN..-EIGHTH_TURN).contains(&angle) {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Tap { at: Vec2 },
    DragEnded { start: Vec2, translation: Vec2 },
}

/// Press/move/release state for a single pointer.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureTracker {
    start: Option<Vec2>,
    last: Vec2,
    dragging: bool,
}

impl GestureTracker {
    pub fn press(&mut self, at: Vec2) {
        self.start = Some(at);
        self.last = at;
        self.dragging = false;
    }

    pub fn moved(&mut self, at: Vec2) {
        let Some(start) = self.start else {
            return;
        };
        self.last = at;
        if !self.dragging && start.distance(at) >= DRAG_MIN_DISTANCE {
            self.dragging = true;
        }
    }

    pub fn release(&mut self, at: Vec2) -> Option<Gesture> {
        self.moved(at);
        let start = self.start.take()?;
        let dragging = std::mem::take(&mut self.dragging);
        if dragging {
            Some(Gesture::DragEnded {
                start,
                translation: self.last - start,
            })
        } else {
            Some(Gesture::Tap { at: start })
        }
    }

    /// Drop an in-flight press, e.g. when the pointer leaves the surface.
    pub fn cancel(&mut self) {
        self.start = None;
        self.dragging = false;
    }

    pub fn is_pressed(&self) -> bool {
        self.start.is_some()
    }
}
