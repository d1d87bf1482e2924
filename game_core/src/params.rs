/// Game tuning parameters for Ping-Pong
///
/// Distances are canvas pixels, velocities are pixels per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table (3:2 canvas)
    pub const TABLE_WIDTH: f32 = 800.0;
    pub const TABLE_HEIGHT: f32 = 800.0 * 2.0 / 3.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // Gap between paddle and floor
    pub const PADDLE_STEP: f32 = 5.0; // Units per frame while a key is held

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_UP: f32 = 1.1; // Multiply velocity on paddle hit
    pub const MOMENTUM_TRANSFER: f32 = 0.2; // Share of paddle speed added to vx
    pub const HIT_DEBOUNCE_MS: f64 = 500.0;

    // Serve
    pub const SERVE_SPEED_MIN: f32 = 2.0;
    pub const SERVE_SPEED_MAX: f32 = 5.0;
    pub const SERVE_MAX_ANGLE: f32 = std::f32::consts::FRAC_PI_4; // From vertical

    // Scoreboard
    pub const HIGHSCORE_CAPACITY: usize = 10;
}
