//! Host input events, independent of any windowing API

use glam::Vec2;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Space,
    Escape,
}

impl Key {
    /// Map a DOM-style key identifier, including the legacy names
    pub fn from_key_str(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            " " | "Spacebar" => Some(Key::Space),
            "Escape" | "Esc" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Pointer click in viewport coordinates
///
/// `origin` is the canvas' top-left corner on screen and `scale` the ratio
/// of backing-store pixels to displayed pixels on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerClick {
    pub client: Vec2,
    pub origin: Vec2,
    pub scale: Vec2,
}

impl PointerClick {
    pub fn new(client: Vec2, origin: Vec2, scale: Vec2) -> Self {
        Self {
            client,
            origin,
            scale,
        }
    }

    /// Build from the canvas' displayed size and backing-store size.
    /// A collapsed display size falls back to a scale of 1.
    pub fn from_display(client: Vec2, origin: Vec2, displayed: Vec2, backing: Vec2) -> Self {
        let axis = |backing: f32, shown: f32| {
            if shown > 0.0 {
                backing / shown
            } else {
                1.0
            }
        };
        let scale = Vec2::new(axis(backing.x, displayed.x), axis(backing.y, displayed.y));
        Self::new(client, origin, scale)
    }

    /// Position in canvas pixel space
    pub fn to_canvas(&self) -> Vec2 {
        (self.client - self.origin) * self.scale
    }
}
