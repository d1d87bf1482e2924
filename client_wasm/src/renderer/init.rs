//! Canvas lookup and sizing

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::error::ClientError;

/// Widest the table gets, in backing-store pixels
pub const MAX_CANVAS_WIDTH: f64 = 800.0;
/// Share of the viewport used on narrow screens
pub const NARROW_FILL: f64 = 0.95;
/// Height over width (3:2 table)
pub const ASPECT: f64 = 2.0 / 3.0;

pub fn find_canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement, ClientError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ClientError::CanvasNotFound(id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ClientError::NotACanvas(id.to_string()))
}

/// Size the backing store to the viewport, keeping the 3:2 aspect
pub fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> Result<(), ClientError> {
    let inner = window
        .inner_width()
        .map_err(ClientError::dom)?
        .as_f64()
        .unwrap_or(MAX_CANVAS_WIDTH);

    let width = if inner > MAX_CANVAS_WIDTH {
        MAX_CANVAS_WIDTH
    } else {
        inner * NARROW_FILL
    };

    canvas.set_width(width as u32);
    canvas.set_height((width * ASPECT) as u32);
    log::debug!("Canvas sized to {}x{}", canvas.width(), canvas.height());
    Ok(())
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, ClientError> {
    canvas
        .get_context("2d")
        .map_err(ClientError::dom)?
        .ok_or(ClientError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ClientError::NoContext)
}
