//! Render snapshot protocol for the Ping-Pong game
//!
//! The simulation hands one `Frame` per step to whatever draws it.
//! Uses postcard for compact binary serialization when the renderer
//! lives outside Rust.

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};

// ============================================================================
// Shapes
// ============================================================================

/// Axis-aligned rectangle in canvas pixels (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }
}

/// Filled circle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Clickable menu button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
}

// ============================================================================
// Frames
// ============================================================================

/// What is on screen this frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scene {
    /// Title screen with the two menu buttons
    Menu {
        title: String,
        play: Button,
        scoreboard: Button,
        hint: String,
    },

    /// Session highscores, best first
    Scoreboard {
        title: String,
        highscores: Vec<u32>,
        back: Button,
    },

    /// The table during a run
    Playing {
        ball: Circle,
        paddle: Rect,
        score: u32,
        highscore: u32,
        paused: bool,
    },
}

/// Complete render state for one step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub scene: Scene,
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Frame {
    /// Serialize frame to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize frame from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.scene, Scene::Playing { .. })
    }
}
