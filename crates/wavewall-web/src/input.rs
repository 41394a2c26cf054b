use glam::Vec2;
use web_sys as web;

/// Canvas backing-store size for a CSS box at the given device pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let w = (css_width * dpr).round() as u32;
    let h = (css_height * dpr).round() as u32;
    (w.max(1), h.max(1))
}

/// Client coordinates to logical canvas pixels (CSS px from the top-left).
#[inline]
pub fn client_to_logical(client: Vec2, canvas_origin: Vec2) -> Vec2 {
    client - canvas_origin
}

#[inline]
pub fn pointer_logical_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_logical(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
    )
}
