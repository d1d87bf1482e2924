use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Move ball by one frame of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Apply paddle movement based on held keys and record its speed
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.prev_x = paddle.x;

        let delta = intent.dir() as f32 * config.paddle_step;
        // Clamp to table bounds
        paddle.x = config.clamp_paddle_x(paddle.x + delta);

        paddle.speed = paddle.x - paddle.prev_x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn paddle_of(world: &World) -> Paddle {
        *world
            .query::<&Paddle>()
            .iter()
            .next()
            .map(|(_e, p)| p)
            .expect("paddle exists")
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(3.0, -2.0));

        move_ball(&mut world);
        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(106.0, 96.0));
            assert_eq!(ball.vel, Vec2::new(3.0, -2.0), "velocity untouched");
        }
    }

    #[test]
    fn test_paddle_moves_right_and_tracks_speed() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, 100.0);
        world
            .insert_one(entity, PaddleIntent { left: false, right: true })
            .expect("paddle entity");

        move_paddles(&mut world, &config);

        let paddle = paddle_of(&world);
        assert_eq!(paddle.x, 105.0);
        assert_eq!(paddle.prev_x, 100.0);
        assert_eq!(paddle.speed, 5.0);
    }

    #[test]
    fn test_paddle_speed_zero_when_idle() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, 100.0);

        move_paddles(&mut world, &config);

        let paddle = paddle_of(&world);
        assert_eq!(paddle.x, 100.0);
        assert_eq!(paddle.speed, 0.0);
    }

    #[test]
    fn test_paddle_clamped_to_table() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, 2.0);
        world
            .insert_one(entity, PaddleIntent { left: true, right: false })
            .expect("paddle entity");

        move_paddles(&mut world, &config);
        let paddle = paddle_of(&world);
        assert_eq!(paddle.x, 0.0);
        assert_eq!(paddle.speed, -2.0);

        move_paddles(&mut world, &config);
        assert_eq!(paddle_of(&world).x, 0.0);
        assert_eq!(paddle_of(&world).speed, 0.0);

        world
            .insert_one(entity, PaddleIntent { left: false, right: true })
            .expect("paddle entity");
        for _ in 0..500 {
            move_paddles(&mut world, &config);
            let x = paddle_of(&world).x;
            assert!((0.0..=config.paddle_max_x()).contains(&x));
        }
        assert_eq!(paddle_of(&world).x, config.paddle_max_x());
    }
}
