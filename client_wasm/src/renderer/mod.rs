pub mod draw;
pub mod init;

use proto::Frame;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::ClientError;

/// Draws frames onto a 2D canvas
pub struct Renderer {
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, ClientError> {
        Ok(Self {
            ctx: init::context_2d(canvas)?,
        })
    }

    pub fn draw(&self, frame: &Frame) -> Result<(), ClientError> {
        draw::draw_frame(&self.ctx, frame).map_err(ClientError::dom)
    }
}
