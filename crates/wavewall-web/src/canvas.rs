use crate::paint::PaintOp;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use wavewall_core::{PathCommand, Rect, WavePath};
use web_sys as web;

pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    logo: Option<web::HtmlImageElement>,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d, logo: Option<web::HtmlImageElement>) -> Self {
        Self { ctx, logo }
    }

    /// Decoded and drawable; an image that failed to load reports zero size.
    pub fn has_logo(&self) -> bool {
        self.logo
            .as_ref()
            .map(|img| img.complete() && img.natural_width() > 0)
            .unwrap_or(false)
    }

    pub fn paint(&self, ops: &[PaintOp], dpr: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        ctx.set_global_alpha(1.0);
        for op in ops {
            match op {
                PaintOp::FillRect { rect, color } => {
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.fill_rect(
                        rect.origin.x as f64,
                        rect.origin.y as f64,
                        rect.size.x as f64,
                        rect.size.y as f64,
                    );
                }
                PaintOp::Logo { rect, opacity } => {
                    if let Some(img) = &self.logo {
                        ctx.set_global_alpha(*opacity as f64);
                        ctx.draw_image_with_html_image_element_and_dw_and_dh(
                            img,
                            rect.origin.x as f64,
                            rect.origin.y as f64,
                            rect.size.x as f64,
                            rect.size.y as f64,
                        )?;
                        ctx.set_global_alpha(1.0);
                    }
                }
                PaintOp::MuteIcon { rect, muted, color } => {
                    self.mute_icon(*rect, *muted, &color.to_css())?;
                }
                PaintOp::FillCircle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.begin_path();
                    ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.fill();
                }
                PaintOp::FillPath { path, color } => {
                    self.trace(path);
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.fill();
                }
            }
        }
        Ok(())
    }

    fn trace(&self, path: &WavePath) {
        let ctx = &self.ctx;
        ctx.begin_path();
        for cmd in &path.commands {
            match *cmd {
                PathCommand::MoveTo(p) => ctx.move_to(p.x as f64, p.y as f64),
                PathCommand::LineTo(p) => ctx.line_to(p.x as f64, p.y as f64),
                PathCommand::CubicTo { ctrl1, ctrl2, to } => ctx.bezier_curve_to(
                    ctrl1.x as f64,
                    ctrl1.y as f64,
                    ctrl2.x as f64,
                    ctrl2.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                PathCommand::Close => ctx.close_path(),
            }
        }
    }

    // speaker in a ring, slashed while muted
    fn mute_icon(&self, rect: Rect, muted: bool, css: &str) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let c = rect.center();
        let r = rect.size.x.min(rect.size.y) * 0.5;
        let stroke = (r * 0.12).max(1.0);
        let unit = r * 0.5;
        ctx.set_fill_style_str(css);
        ctx.set_stroke_style_str(css);
        ctx.set_line_width(stroke as f64);

        ctx.begin_path();
        ctx.arc(c.x as f64, c.y as f64, (r - stroke * 0.5) as f64, 0.0, TAU)?;
        ctx.stroke();

        let cone_x1 = c.x + unit * 0.2;
        let speaker = [
            Vec2::new(c.x - unit * 0.9, c.y - unit * 0.3),
            Vec2::new(c.x - unit * 0.4, c.y - unit * 0.3),
            Vec2::new(cone_x1, c.y - unit * 0.8),
            Vec2::new(cone_x1, c.y + unit * 0.8),
            Vec2::new(c.x - unit * 0.4, c.y + unit * 0.3),
            Vec2::new(c.x - unit * 0.9, c.y + unit * 0.3),
        ];
        ctx.begin_path();
        ctx.move_to(speaker[0].x as f64, speaker[0].y as f64);
        for p in &speaker[1..] {
            ctx.line_to(p.x as f64, p.y as f64);
        }
        ctx.close_path();
        ctx.fill();

        ctx.begin_path();
        if muted {
            let reach = (r * 0.62) as f64;
            ctx.move_to(c.x as f64 - reach, c.y as f64 - reach);
            ctx.line_to(c.x as f64 + reach, c.y as f64 + reach);
        } else {
            for k in 1..=2 {
                let x = (cone_x1 + unit * 0.3 * k as f32) as f64;
                let h = (unit * (0.25 + 0.25 * k as f32)) as f64;
                ctx.move_to(x, c.y as f64 - h);
                ctx.line_to(x, c.y as f64 + h);
            }
        }
        ctx.stroke();
        Ok(())
    }
}
