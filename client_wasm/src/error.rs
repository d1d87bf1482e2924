//! Host-side failures

use game_core::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("canvas #{0} not found")]
    CanvasNotFound(String),

    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    #[error("2D rendering context unavailable")]
    NoContext,

    #[error("invalid config JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to encode frame: {0}")]
    Encode(String),

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl ClientError {
    /// Wrap an exception thrown by a DOM call
    pub fn dom(err: JsValue) -> Self {
        ClientError::Dom(format!("{err:?}"))
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
