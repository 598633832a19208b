use glam::Vec2;
use web_sys as web;

/// Last-seen pointer position in canvas backing-store pixels.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Pointer in normalized device coordinates, [-1, 1] with +y up, which is
/// what every behavior expects.
#[inline]
pub fn pointer_ndc(canvas: &web::HtmlCanvasElement, mouse: &MouseState) -> Vec2 {
    let w = canvas.width().max(1) as f32;
    let h = canvas.height().max(1) as f32;
    let x = (mouse.x / w) * 2.0 - 1.0;
    let y = 1.0 - (mouse.y / h) * 2.0;
    Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}
