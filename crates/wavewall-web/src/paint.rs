// Frame -> ordered 2D canvas drawing commands. Pure, so it runs in host tests.

use glam::Vec2;
use wavewall_core::color::BLACK;
use wavewall_core::{Frame, Rect, Rgba, WavePath, LOGO_OPACITY, MUTE_ICON_OPACITY};

#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    FillRect { rect: Rect, color: Rgba },
    Logo { rect: Rect, opacity: f32 },
    MuteIcon { rect: Rect, muted: bool, color: Rgba },
    FillCircle { center: Vec2, radius: f32, color: Rgba },
    FillPath { path: WavePath, color: Rgba },
}

/// Back to front: backdrop, veil, header, bands.
pub fn paint_list(frame: &Frame, muted: bool, has_logo: bool) -> Vec<PaintOp> {
    let full = Rect::new(0.0, 0.0, frame.viewport.width, frame.viewport.height);
    let mut ops = Vec::with_capacity(5 + frame.bands.len());
    ops.push(PaintOp::FillRect {
        rect: full,
        color: frame.backdrop,
    });
    ops.push(PaintOp::FillRect {
        rect: full,
        color: frame.veil,
    });
    if has_logo {
        ops.push(PaintOp::Logo {
            rect: frame.layout.logo,
            opacity: LOGO_OPACITY,
        });
    }
    ops.push(PaintOp::MuteIcon {
        rect: frame.layout.mute_button,
        muted,
        color: BLACK.with_opacity(MUTE_ICON_OPACITY),
    });
    let ind = frame.layout.indicator;
    ops.push(PaintOp::FillCircle {
        center: ind.center(),
        radius: ind.size.x.min(ind.size.y) * 0.5,
        color: frame.indicator,
    });
    ops.extend(frame.bands.iter().map(|band| PaintOp::FillPath {
        path: band.placed_path(),
        color: band.fill,
    }));
    ops
}
