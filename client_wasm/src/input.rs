//! DOM event conversion

use game_core::PointerClick;
use glam::Vec2;
use web_sys::{HtmlCanvasElement, MouseEvent};

/// Map a click to viewport coordinates plus the canvas' on-screen scaling
pub fn pointer_click(event: &MouseEvent, canvas: &HtmlCanvasElement) -> PointerClick {
    let rect = canvas.get_bounding_client_rect();
    PointerClick::from_display(
        Vec2::new(event.client_x() as f32, event.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
