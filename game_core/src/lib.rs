pub mod components;
pub mod config;
pub mod fsm;
pub mod input;
pub mod layout;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use input::*;
pub use layout::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;

pub use proto::Frame;

use hecs::World;
use systems::*;

/// Run one frame of the deterministic Ping-Pong physics
///
/// Returns true if the ball dropped and a new run was served.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    config: &Config,
    score: &mut Score,
    highscores: &mut Highscores,
    hit_timer: &mut HitTimer,
    events: &mut Events,
    rng: &mut GameRng,
) -> bool {
    // 1. Move ball
    move_ball(world);

    // 2. Bounce off walls and ceiling
    check_walls(world, config, events);

    // 3. Bounce off paddle (uses last frame's paddle speed)
    check_paddle_hit(world, config, time, hit_timer, score, events);

    // 4. Check ball drop (ends the run)
    let run_ended = check_ball_drop(world, config, score, highscores, events, rng);

    // 5. Move paddle based on held keys
    move_paddles(world, config);

    run_ended
}

/// Helper to create the paddle entity
pub fn create_paddle(world: &mut World, x: f32) -> hecs::Entity {
    world.spawn((Paddle::new(x), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
