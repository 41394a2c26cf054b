//! Wave band silhouettes.
//!
//! A band is two sine-like oscillations built from cubic beziers, closed by
//! straight edges down to the viewport bottom. The control points sit at 0.35
//! and 0.65 of each period, which approximates a sine without sampling
//! trigonometric functions.

use crate::constants::{CONTROL_LEAD, CONTROL_TRAIL};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    LineTo(Vec2),
    Close,
}

/// Closed outline made of move/cubic/line commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WavePath {
    pub commands: SmallVec<[PathCommand; 6]>,
}

/// Build the band silhouette for one wave.
///
/// `baseline` is the absolute y of the oscillation's rest line and `bottom`
/// the viewport height the fill extends to. Screen y grows downward.
pub fn wave_band_path(period: f32, amplitude: f32, baseline: f32, bottom: f32) -> WavePath {
    let p = period;
    let y = baseline;
    let mut commands = SmallVec::new();
    commands.push(PathCommand::MoveTo(Vec2::new(0.0, y)));
    commands.push(PathCommand::CubicTo {
        ctrl1: Vec2::new(p * CONTROL_LEAD, y + amplitude),
        ctrl2: Vec2::new(p * CONTROL_TRAIL, y - amplitude),
        to: Vec2::new(p, y),
    });
    commands.push(PathCommand::CubicTo {
        ctrl1: Vec2::new(p * (1.0 + CONTROL_LEAD), y + amplitude),
        ctrl2: Vec2::new(p * (1.0 + CONTROL_TRAIL), y - amplitude),
        to: Vec2::new(2.0 * p, y),
    });
    commands.push(PathCommand::LineTo(Vec2::new(2.0 * p, bottom)));
    commands.push(PathCommand::LineTo(Vec2::new(0.0, bottom)));
    commands.push(PathCommand::Close);
    WavePath { commands }
}

#[inline]
pub fn cubic_point(p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let mt = 1.0 - t;
    p0 * (mt * mt * mt) + c1 * (3.0 * mt * mt * t) + c2 * (3.0 * mt * t * t) + p3 * (t * t * t)
}

impl WavePath {
    /// Point where the outline starts.
    pub fn start(&self) -> Option<Vec2> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// End points of every segment, in order, excluding control points.
    pub fn vertices(&self) -> Vec<Vec2> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
                PathCommand::CubicTo { to, .. } => Some(*to),
                PathCommand::Close => None,
            })
            .collect()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Shift every point horizontally.
    pub fn translated(&self, dx: f32) -> WavePath {
        let d = Vec2::new(dx, 0.0);
        let commands = self
            .commands
            .iter()
            .map(|c| match *c {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(p + d),
                PathCommand::LineTo(p) => PathCommand::LineTo(p + d),
                PathCommand::CubicTo { ctrl1, ctrl2, to } => PathCommand::CubicTo {
                    ctrl1: ctrl1 + d,
                    ctrl2: ctrl2 + d,
                    to: to + d,
                },
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        WavePath { commands }
    }

    /// Sample the outline into a polygon: the curved top edge followed by
    /// the straight edges. The closing edge is implied.
    pub fn flatten(&self, segments: usize) -> Vec<Vec2> {
        let mut out = self.top_edge(segments);
        out.extend(self.commands.iter().filter_map(|c| match c {
            PathCommand::LineTo(p) => Some(*p),
            _ => None,
        }));
        out
    }

    /// Triangulate the filled band.
    ///
    /// The top edge is x-monotone, so every pair of neighbouring samples on
    /// it forms a column that is split into two triangles reaching `bottom`.
    pub fn fill_triangles(&self, segments: usize, bottom: f32) -> Vec<[Vec2; 3]> {
        let top = self.top_edge(segments);
        let mut tris = Vec::with_capacity(top.len().saturating_sub(1) * 2);
        for pair in top.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let a_bottom = Vec2::new(a.x, bottom);
            let b_bottom = Vec2::new(b.x, bottom);
            tris.push([a, b, b_bottom]);
            tris.push([a, b_bottom, a_bottom]);
        }
        tris
    }

    /// The sampled curve from the start point through the last cubic.
    pub fn top_edge(&self, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(1);
        let mut out = Vec::new();
        let mut cursor = Vec2::ZERO;
        for c in &self.commands {
            match *c {
                PathCommand::MoveTo(p) => {
                    out.push(p);
                    cursor = p;
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    for i in 1..=segments {
                        let t = i as f32 / segments as f32;
                        out.push(cubic_point(cursor, ctrl1, ctrl2, to, t));
                    }
                    cursor = to;
                }
                PathCommand::LineTo(_) | PathCommand::Close => break,
            }
        }
        out
    }
}
