use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng};

/// Ball component - position and per-frame velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Ball at the table centre with a random serve
    pub fn served(config: &Config, rng: &mut GameRng) -> Self {
        Self::new(config.table_center(), serve_velocity(config, rng))
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn bottom(&self, radius: f32) -> f32 {
        self.pos.y + radius
    }
}

/// Random serve velocity
///
/// Angle is drawn from [-max, max) around vertical and speed from
/// [min, max); the vertical direction is a coin flip.
pub fn serve_velocity(config: &Config, rng: &mut GameRng) -> Vec2 {
    let angle: f32 = rng
        .0
        .gen_range(-config.serve_max_angle..config.serve_max_angle);
    let speed: f32 = rng
        .0
        .gen_range(config.serve_speed_min..config.serve_speed_max);

    let mut vel = Vec2::new(angle.sin(), angle.cos()) * speed;
    if rng.0.gen_bool(0.5) {
        vel.y = -vel.y;
    }
    vel
}

/// Paddle component - the bat along the floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,      // Left edge
    pub prev_x: f32, // Left edge on the previous frame
    pub speed: f32,  // x - prev_x, fed into hits
}

impl Paddle {
    pub fn new(x: f32) -> Self {
        Self {
            x,
            prev_x: x,
            speed: 0.0,
        }
    }

    /// Paddle centred on the table, at rest
    pub fn centered(config: &Config) -> Self {
        Self::new(config.paddle_start_x())
    }
}

/// Held arrow keys for the paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub left: bool,
    pub right: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// -1 = left, 0 = stop (or both held), 1 = right
    pub fn dir(&self) -> i8 {
        self.right as i8 - self.left as i8
    }
}
