use crate::{Ball, Config, Events, GameRng, Highscores, Paddle, Score};
use hecs::World;

/// Check if the ball fell past the floor and, if so, end the run
///
/// Returns true when a run ended this frame.
pub fn check_ball_drop(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    highscores: &mut Highscores,
    events: &mut Events,
    rng: &mut GameRng,
) -> bool {
    let dropped = world
        .query::<&Ball>()
        .iter()
        .any(|(_e, ball)| ball.bottom(config.ball_radius) > config.table_height);

    if !dropped {
        return false;
    }

    let points = score.points;
    if highscores.record(points) {
        log::info!("Run over with {points} points, best is {}", highscores.best());
    } else {
        log::info!("Run over with {points} points");
    }

    events.run_ended = true;
    reset_run(world, config, score, rng);
    true
}

/// Serve a fresh ball from the centre, centre the paddle, zero the score
pub fn reset_run(world: &mut World, config: &Config, score: &mut Score, rng: &mut GameRng) {
    score.reset();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        *ball = Ball::served(config, rng);
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        *paddle = Paddle::centered(config);
    }
}
