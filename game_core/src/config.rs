use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub table_width: f32,
    pub table_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_step: f32,
    pub ball_radius: f32,
    pub speed_up: f32,
    pub momentum_transfer: f32,
    pub hit_debounce_ms: f64,
    pub serve_speed_min: f32,
    pub serve_speed_max: f32,
    pub serve_max_angle: f32,
    pub highscore_capacity: usize,
    /// Return to the menu when the ball drops instead of serving again in place
    pub menu_on_drop: bool,
}

/// Reasons a configuration cannot drive a game
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("table size must be finite and positive, got {width}x{height}")]
    InvalidTableSize { width: f32, height: f32 },

    #[error("paddle {width}x{height} does not fit on the table")]
    PaddleDoesNotFit { width: f32, height: f32 },

    #[error("paddle step must be finite and not negative, got {0}")]
    InvalidPaddleStep(f32),

    #[error("ball radius must be positive, got {0}")]
    InvalidBallRadius(f32),

    #[error("speed-up factor must be finite and positive, got {0}")]
    InvalidSpeedUp(f32),

    #[error("momentum transfer must be finite, got {0}")]
    InvalidMomentumTransfer(f32),

    #[error("hit debounce must be finite and not negative, got {0}ms")]
    InvalidHitDebounce(f64),

    #[error("serve speed range [{min}, {max}) is empty or not positive")]
    InvalidServeSpeed { min: f32, max: f32 },

    #[error("serve angle must be between 0 and 90 degrees, got {0} rad")]
    InvalidServeAngle(f32),

    #[error("highscore capacity must be at least 1")]
    EmptyScoreboard,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_width: Params::TABLE_WIDTH,
            table_height: Params::TABLE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_step: Params::PADDLE_STEP,
            ball_radius: Params::BALL_RADIUS,
            speed_up: Params::BALL_SPEED_UP,
            momentum_transfer: Params::MOMENTUM_TRANSFER,
            hit_debounce_ms: Params::HIT_DEBOUNCE_MS,
            serve_speed_min: Params::SERVE_SPEED_MIN,
            serve_speed_max: Params::SERVE_SPEED_MAX,
            serve_max_angle: Params::SERVE_MAX_ANGLE,
            highscore_capacity: Params::HIGHSCORE_CAPACITY,
            menu_on_drop: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same tuning on a table of a different size (e.g. the canvas backing store)
    pub fn with_table_size(mut self, width: f32, height: f32) -> Self {
        self.table_width = width;
        self.table_height = height;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = (self.table_width, self.table_height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::InvalidTableSize {
                width: w,
                height: h,
            });
        }
        if !(self.paddle_width.is_finite()
            && self.paddle_height.is_finite()
            && self.paddle_margin.is_finite()
            && self.paddle_width > 0.0
            && self.paddle_width <= w
            && self.paddle_height > 0.0
            && self.paddle_margin >= 0.0
            && self.paddle_height + self.paddle_margin < h)
        {
            return Err(ConfigError::PaddleDoesNotFit {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if !(self.paddle_step.is_finite() && self.paddle_step >= 0.0) {
            return Err(ConfigError::InvalidPaddleStep(self.paddle_step));
        }
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            return Err(ConfigError::InvalidBallRadius(self.ball_radius));
        }
        if !(self.speed_up.is_finite() && self.speed_up > 0.0) {
            return Err(ConfigError::InvalidSpeedUp(self.speed_up));
        }
        if !self.momentum_transfer.is_finite() {
            return Err(ConfigError::InvalidMomentumTransfer(self.momentum_transfer));
        }
        if !(self.hit_debounce_ms.is_finite() && self.hit_debounce_ms >= 0.0) {
            return Err(ConfigError::InvalidHitDebounce(self.hit_debounce_ms));
        }
        // `gen_range` panics on an infinite range
        if !(self.serve_speed_min.is_finite()
            && self.serve_speed_max.is_finite()
            && self.serve_speed_min > 0.0
            && self.serve_speed_min < self.serve_speed_max)
        {
            return Err(ConfigError::InvalidServeSpeed {
                min: self.serve_speed_min,
                max: self.serve_speed_max,
            });
        }
        if !(self.serve_max_angle > 0.0 && self.serve_max_angle < std::f32::consts::FRAC_PI_2) {
            return Err(ConfigError::InvalidServeAngle(self.serve_max_angle));
        }
        if self.highscore_capacity == 0 {
            return Err(ConfigError::EmptyScoreboard);
        }
        Ok(())
    }

    /// Largest x the paddle's left edge may take
    pub fn paddle_max_x(&self) -> f32 {
        self.table_width - self.paddle_width
    }

    /// Clamp paddle X to table bounds
    pub fn clamp_paddle_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.paddle_max_x())
    }

    /// Paddle X that centres it on the table
    pub fn paddle_start_x(&self) -> f32 {
        self.table_width / 2.0 - self.paddle_width / 2.0
    }

    /// Y of the paddle's top edge
    pub fn paddle_top(&self) -> f32 {
        self.table_height - self.paddle_height - self.paddle_margin
    }

    /// Y of the paddle's bottom edge
    pub fn paddle_bottom(&self) -> f32 {
        self.table_height - self.paddle_margin
    }

    pub fn table_center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.table_width / 2.0, self.table_height / 2.0)
    }
}
