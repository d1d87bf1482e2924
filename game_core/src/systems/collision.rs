use crate::{Ball, Config, Events, HitTimer, Paddle, Score, Time};
use hecs::World;

/// Bounce the ball off the side walls and the ceiling
///
/// A component is only inverted while the ball still moves outward, so a
/// ball that overshoots a wall cannot flip back and forth in place. A ball
/// that reached the wall under its own velocity is back inside one frame
/// after the flip, so for served balls this is the same as inverting on
/// every overlap.
pub fn check_walls(world: &mut World, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let past_right = ball.pos.x + radius > config.table_width && ball.vel.x > 0.0;
        let past_left = ball.pos.x - radius < 0.0 && ball.vel.x < 0.0;
        if past_right || past_left {
            ball.vel.x = -ball.vel.x;
            events.wall_hit = true;
        }

        if ball.pos.y - radius < 0.0 && ball.vel.y < 0.0 {
            ball.vel.y = -ball.vel.y;
            events.wall_hit = true;
        }
    }
}

/// Bounce the ball off the paddle and score the hit
///
/// Hits need the ball's bottom inside the paddle band, its centre over the
/// paddle, downward motion, and an expired debounce window.
pub fn check_paddle_hit(
    world: &mut World,
    config: &Config,
    time: &Time,
    hit_timer: &mut HitTimer,
    score: &mut Score,
    events: &mut Events,
) {
    // Copy the paddle out so the ball can be borrowed mutably below
    let paddle = world
        .query::<&Paddle>()
        .iter()
        .next()
        .map(|(_e, paddle)| *paddle);

    let Some(paddle) = paddle else {
        return; // No paddle in world
    };

    let top = config.paddle_top();
    let bottom = config.paddle_bottom();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_bottom = ball.bottom(config.ball_radius);
        let in_band = ball_bottom > top && ball_bottom < bottom;
        let over_paddle = ball.pos.x > paddle.x && ball.pos.x < paddle.x + config.paddle_width;

        if in_band
            && over_paddle
            && ball.vel.y > 0.0
            && hit_timer.ready(time.now_ms, config.hit_debounce_ms)
        {
            ball.vel.y = -ball.vel.y;
            ball.vel *= config.speed_up;
            // Paddle momentum carries into the ball
            ball.vel.x += paddle.speed * config.momentum_transfer;

            hit_timer.record(time.now_ms);
            score.increment();
            events.paddle_hit = true;
        }
    }
}
