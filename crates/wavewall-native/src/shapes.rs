//! CPU tessellation of a scene frame into colored triangles.
//!
//! Everything is in logical pixels; the vertex shader maps to clip space.

use glam::Vec2;
use std::f32::consts::TAU;
use wavewall_core::color::BLACK;
use wavewall_core::{Frame, Rect, Rgba, MUTE_ICON_OPACITY};

pub const CURVE_SEGMENTS: usize = 48;
const CIRCLE_SEGMENTS: usize = 40;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexturedVertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub tint: [f32; 4],
}

/// Triangle list with the helpers the header and bands need.
#[derive(Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn len(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba) {
        let color = color.to_array();
        for p in [a, b, c] {
            self.vertices.push(Vertex {
                pos: p.to_array(),
                color,
            });
        }
    }

    pub fn quad(&mut self, corners: [Vec2; 4], color: Rgba) {
        let [a, b, c, d] = corners;
        self.triangle(a, b, c, color);
        self.triangle(a, c, d, color);
    }

    pub fn rect(&mut self, rect: Rect, color: Rgba) {
        let o = rect.origin;
        let s = rect.size;
        self.quad(
            [
                o,
                Vec2::new(o.x + s.x, o.y),
                o + s,
                Vec2::new(o.x, o.y + s.y),
            ],
            color,
        );
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        for i in 0..CIRCLE_SEGMENTS {
            let a0 = i as f32 / CIRCLE_SEGMENTS as f32 * TAU;
            let a1 = (i + 1) as f32 / CIRCLE_SEGMENTS as f32 * TAU;
            self.triangle(
                center,
                center + Vec2::from_angle(a0) * radius,
                center + Vec2::from_angle(a1) * radius,
                color,
            );
        }
    }

    pub fn ring(&mut self, center: Vec2, radius: f32, thickness: f32, color: Rgba) {
        let inner = (radius - thickness).max(0.0);
        for i in 0..CIRCLE_SEGMENTS {
            let d0 = Vec2::from_angle(i as f32 / CIRCLE_SEGMENTS as f32 * TAU);
            let d1 = Vec2::from_angle((i + 1) as f32 / CIRCLE_SEGMENTS as f32 * TAU);
            self.quad(
                [
                    center + d0 * inner,
                    center + d0 * radius,
                    center + d1 * radius,
                    center + d1 * inner,
                ],
                color,
            );
        }
    }

    /// Thick segment from `a` to `b`.
    pub fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: Rgba) {
        let dir = (b - a).normalize_or_zero();
        let n = Vec2::new(-dir.y, dir.x) * (width * 0.5);
        self.quad([a + n, b + n, b - n, a - n], color);
    }
}

/// Speaker glyph in a ring, crossed out while muted.
pub fn mute_icon(mesh: &mut Mesh, rect: Rect, muted: bool) {
    let color = BLACK.with_opacity(MUTE_ICON_OPACITY);
    let c = rect.center();
    let r = rect.size.x.min(rect.size.y) * 0.5;
    let stroke = (r * 0.12).max(1.0);
    mesh.ring(c, r, stroke, color);

    // box then flared cone, left of centre
    let unit = r * 0.5;
    let body = Rect::new(c.x - unit * 0.9, c.y - unit * 0.3, unit * 0.5, unit * 0.6);
    mesh.rect(body, color);
    let cone_x0 = body.origin.x + body.size.x;
    let cone_x1 = c.x + unit * 0.2;
    mesh.quad(
        [
            Vec2::new(cone_x0, c.y - unit * 0.3),
            Vec2::new(cone_x1, c.y - unit * 0.8),
            Vec2::new(cone_x1, c.y + unit * 0.8),
            Vec2::new(cone_x0, c.y + unit * 0.3),
        ],
        color,
    );

    if muted {
        let reach = r * 0.62;
        mesh.line(
            c + Vec2::new(-reach, -reach),
            c + Vec2::new(reach, reach),
            stroke,
            color,
        );
    } else {
        // two short sound waves
        for k in 1..=2 {
            let x = cone_x1 + unit * 0.3 * k as f32;
            let h = unit * (0.25 + 0.25 * k as f32);
            mesh.line(Vec2::new(x, c.y - h), Vec2::new(x, c.y + h), stroke, color);
        }
    }
}

/// Triangles split around the logo, which draws with its own pipeline.
pub struct FrameMesh {
    pub mesh: Mesh,
    /// Vertices before this index draw under the logo.
    pub logo_split: u32,
}

pub fn build_frame_mesh(frame: &Frame, muted: bool) -> FrameMesh {
    let mut mesh = Mesh::default();
    let full = Rect::new(0.0, 0.0, frame.viewport.width, frame.viewport.height);
    mesh.rect(full, frame.veil);
    let logo_split = mesh.len();

    mute_icon(&mut mesh, frame.layout.mute_button, muted);
    let ind = frame.layout.indicator;
    mesh.circle(ind.center(), ind.size.x.min(ind.size.y) * 0.5, frame.indicator);

    for band in &frame.bands {
        let placed = band.placed_path();
        for [a, b, c] in placed.fill_triangles(CURVE_SEGMENTS, frame.viewport.height) {
            mesh.triangle(a, b, c, band.fill);
        }
    }
    FrameMesh { mesh, logo_split }
}

/// Textured quad covering `rect`, tinted by `opacity`.
pub fn logo_quad(rect: Rect, opacity: f32) -> [TexturedVertex; 6] {
    let tint = [1.0, 1.0, 1.0, opacity];
    let o = rect.origin;
    let s = rect.size;
    let v = |x: f32, y: f32, u: f32, w: f32| TexturedVertex {
        pos: [x, y],
        uv: [u, w],
        tint,
    };
    let tl = v(o.x, o.y, 0.0, 0.0);
    let tr = v(o.x + s.x, o.y, 1.0, 0.0);
    let br = v(o.x + s.x, o.y + s.y, 1.0, 1.0);
    let bl = v(o.x, o.y + s.y, 0.0, 1.0);
    [tl, tr, br, tl, br, bl]
}
