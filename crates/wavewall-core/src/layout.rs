use crate::constants::*;
use glam::Vec2;

/// Logical size of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x <= self.origin.x + self.size.x
            && p.y <= self.origin.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}

/// Header placement: logo and mute button share the top row, the
/// direction indicator sits right-aligned beneath it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub logo: Rect,
    pub mute_button: Rect,
    pub indicator: Rect,
}

impl Layout {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let left = CONTENT_PADDING;
        let right = viewport.width - CONTENT_PADDING;
        let top = CONTENT_PADDING;
        let row_height = LOGO_SIZE.max(MUTE_ICON_SIZE);

        let logo = Rect::new(left, top + (row_height - LOGO_SIZE) / 2.0, LOGO_SIZE, LOGO_SIZE);
        let mute_button = Rect::new(
            right - MUTE_ICON_SIZE,
            top + (row_height - MUTE_ICON_SIZE) / 2.0,
            MUTE_ICON_SIZE,
            MUTE_ICON_SIZE,
        );
        let indicator = Rect::new(
            right - INDICATOR_SIZE,
            top + row_height + STACK_SPACING,
            INDICATOR_SIZE,
            INDICATOR_SIZE,
        );
        Self {
            logo,
            mute_button,
            indicator,
        }
    }

    pub fn hits_mute_button(&self, p: Vec2) -> bool {
        self.mute_button.contains(p)
    }
}
