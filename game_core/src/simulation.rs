//! The single owner of all game state
//!
//! A host calls [`GameSimulation::step`] once per display refresh and
//! forwards keyboard and pointer events in between. Nothing here touches
//! I/O; drawing happens from the returned [`Frame`].

use glam::Vec2;
use hecs::World;
use proto::{Button, Circle, Frame, Rect, Scene};

use crate::systems::reset_run;
use crate::{
    create_ball, create_paddle, Ball, Config, ConfigError, Events, GameAction, GameFsm, GameRng,
    GameState, Highscores, HitTimer, Key, Layout, Paddle, PaddleIntent, PointerClick, Score, Time,
};

const TITLE: &str = "PING PONG";
const SCOREBOARD_TITLE: &str = "HIGHSCORES";
const HINT: &str = "Use Arrow Keys to move, SPACE to pause, Escape to return to menu";

pub struct GameSimulation {
    world: World,
    config: Config,
    layout: Layout,
    fsm: GameFsm,
    time: Time,
    score: Score,
    highscores: Highscores,
    hit_timer: HitTimer,
    events: Events,
    rng: GameRng,
    paused: bool,
    in_progress: bool,
}

impl GameSimulation {
    /// Build a simulation on the menu screen
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            log::warn!("Rejected game config: {err}");
            return Err(err);
        }

        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, config.paddle_start_x());
        let ball = Ball::served(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        Ok(Self {
            world,
            layout: Layout::new(&config),
            highscores: Highscores::new(config.highscore_capacity),
            config,
            fsm: GameFsm::new(),
            time: Time::default(),
            score: Score::new(),
            hit_timer: HitTimer::new(),
            events: Events::new(),
            rng,
            paused: false,
            in_progress: false,
        })
    }

    /// Advance one frame and describe what to draw
    ///
    /// Physics only run while playing and not paused.
    pub fn step(&mut self, now_ms: f64) -> Frame {
        self.time.advance(now_ms);
        self.events.clear();

        if self.fsm.is_playing() && !self.paused {
            let run_ended = crate::step(
                &mut self.world,
                &self.time,
                &self.config,
                &mut self.score,
                &mut self.highscores,
                &mut self.hit_timer,
                &mut self.events,
                &mut self.rng,
            );

            if run_ended && self.config.menu_on_drop {
                self.fsm.transition(GameAction::RunOver);
                self.in_progress = false;
            }
        }

        self.frame()
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Key pressed. Returns true when the host should suppress the key's
    /// default browser action.
    pub fn key_down(&mut self, key: &str) -> bool {
        Key::from_key_str(key).is_some_and(|key| self.press(key))
    }

    /// Key released
    pub fn key_up(&mut self, key: &str) {
        if let Some(key) = Key::from_key_str(key) {
            self.release(key);
        }
    }

    pub fn press(&mut self, key: Key) -> bool {
        match (self.fsm.state(), key) {
            (GameState::Playing, Key::Left) => {
                self.set_intent(|intent| intent.left = true);
                false
            }
            (GameState::Playing, Key::Right) => {
                self.set_intent(|intent| intent.right = true);
                false
            }
            (GameState::Playing, Key::Space) => {
                self.paused = !self.paused;
                log::debug!("Paused: {}", self.paused);
                true
            }
            (GameState::Playing, Key::Escape) => {
                self.paused = true;
                self.fsm.transition(GameAction::Escape);
                false
            }
            (_, Key::Escape) => {
                self.fsm.transition(GameAction::Escape);
                false
            }
            _ => false,
        }
    }

    /// Releases clear the hold flag in any state
    pub fn release(&mut self, key: Key) {
        match key {
            Key::Left => self.set_intent(|intent| intent.left = false),
            Key::Right => self.set_intent(|intent| intent.right = false),
            Key::Space | Key::Escape => {}
        }
    }

    /// Pointer click in viewport coordinates
    pub fn click(&mut self, click: PointerClick) {
        self.click_at(click.to_canvas());
    }

    /// Pointer click already in canvas pixel space
    pub fn click_at(&mut self, point: Vec2) {
        match self.fsm.state() {
            GameState::Menu => {
                if self.layout.play.contains(point) {
                    if self.in_progress {
                        self.continue_game();
                    } else {
                        self.start_game();
                    }
                } else if self.layout.scoreboard.contains(point) {
                    self.fsm.transition(GameAction::OpenScoreboard);
                }
            }
            GameState::Scoreboard => {
                if self.layout.back.contains(point) {
                    self.fsm.transition(GameAction::Back);
                }
            }
            GameState::Playing => {}
        }
    }

    fn start_game(&mut self) {
        if !self.fsm.transition(GameAction::Play) {
            return;
        }
        reset_run(&mut self.world, &self.config, &mut self.score, &mut self.rng);
        self.hit_timer = HitTimer::new();
        self.in_progress = true;
        self.paused = false;
        log::info!("New game started");
    }

    /// Back to the table as it was left; a pause from Escape stays on
    fn continue_game(&mut self) {
        self.fsm.transition(GameAction::Play);
    }

    fn set_intent(&mut self, apply: impl Fn(&mut PaddleIntent)) {
        for (_entity, intent) in self.world.query_mut::<&mut PaddleIntent>() {
            apply(intent);
        }
    }

    // ------------------------------------------------------------------
    // Snapshot
    // ------------------------------------------------------------------

    /// Render state for the current screen, without stepping
    pub fn frame(&self) -> Frame {
        let scene = match self.fsm.state() {
            GameState::Menu => Scene::Menu {
                title: TITLE.to_string(),
                play: Button {
                    rect: self.layout.play.to_rect(),
                    label: if self.in_progress { "CONTINUE" } else { "PLAY" }.to_string(),
                },
                scoreboard: Button {
                    rect: self.layout.scoreboard.to_rect(),
                    label: "SCOREBOARD".to_string(),
                },
                hint: HINT.to_string(),
            },
            GameState::Scoreboard => Scene::Scoreboard {
                title: SCOREBOARD_TITLE.to_string(),
                highscores: self.highscores.entries().to_vec(),
                back: Button {
                    rect: self.layout.back.to_rect(),
                    label: "BACK".to_string(),
                },
            },
            GameState::Playing => {
                let ball = self.ball();
                let paddle = self.paddle();
                Scene::Playing {
                    ball: Circle {
                        x: ball.pos.x,
                        y: ball.pos.y,
                        radius: self.config.ball_radius,
                    },
                    paddle: Rect::new(
                        paddle.x,
                        self.config.paddle_top(),
                        self.config.paddle_width,
                        self.config.paddle_height,
                    ),
                    score: self.score.points,
                    highscore: self.highscores.best(),
                    paused: self.paused,
                }
            }
        };

        Frame {
            width: self.config.table_width,
            height: self.config.table_height,
            scene,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// True once the first run has started (menu shows CONTINUE)
    pub fn game_in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn score(&self) -> u32 {
        self.score.points
    }

    pub fn highscores(&self) -> &[u32] {
        self.highscores.entries()
    }

    pub fn current_highscore(&self) -> u32 {
        self.highscores.best()
    }

    /// What happened during the last step
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| Ball::new(self.config.table_center(), Vec2::ZERO))
    }

    pub fn paddle(&self) -> Paddle {
        self.world
            .query::<&Paddle>()
            .iter()
            .next()
            .map(|(_e, paddle)| *paddle)
            .unwrap_or_else(|| Paddle::centered(&self.config))
    }

    /// Replace the ball, for scripted scenarios and replays
    pub fn set_ball(&mut self, ball: Ball) {
        for (_entity, current) in self.world.query_mut::<&mut Ball>() {
            *current = ball;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_sim() -> GameSimulation {
        let mut sim = GameSimulation::new(Config::new(), 42).expect("default config is valid");
        let play = sim.layout().play;
        sim.click_at((play.min + play.max) * 0.5);
        assert_eq!(sim.state(), GameState::Playing);
        sim
    }

    #[test]
    fn test_starts_on_menu() {
        let sim = GameSimulation::new(Config::new(), 1).expect("valid config");
        assert_eq!(sim.state(), GameState::Menu);
        assert!(!sim.game_in_progress());
        match sim.frame().scene {
            Scene::Menu { play, .. } => assert_eq!(play.label, "PLAY"),
            other => panic!("expected menu, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config::new().with_table_size(-1.0, 100.0);
        assert!(GameSimulation::new(config, 1).is_err());
    }

    #[test]
    fn test_overflowing_json_config_rejected() {
        let config: Config =
            serde_json::from_str(r#"{"serve_speed_max": 1e39}"#).expect("number should parse");
        assert!(matches!(
            GameSimulation::new(config, 1),
            Err(ConfigError::InvalidServeSpeed { .. })
        ));
    }

    #[test]
    fn test_menu_does_not_run_physics() {
        let mut sim = GameSimulation::new(Config::new(), 1).expect("valid config");
        let before = sim.ball();
        for i in 0..10 {
            sim.step(i as f64 * 16.0);
        }
        assert_eq!(sim.ball(), before);
    }

    #[test]
    fn test_pause_freezes_state() {
        let mut sim = playing_sim();
        sim.key_down("ArrowRight");
        sim.step(16.0);

        assert!(sim.key_down(" "), "space is consumed while playing");
        assert!(sim.is_paused());

        let ball = sim.ball();
        let paddle = sim.paddle();
        let score = sim.score();
        for i in 0..30 {
            let frame = sim.step(32.0 + i as f64 * 16.0);
            match frame.scene {
                Scene::Playing { paused, .. } => assert!(paused),
                other => panic!("expected table, got {other:?}"),
            }
        }
        assert_eq!(sim.ball(), ball);
        assert_eq!(sim.paddle(), paddle);
        assert_eq!(sim.score(), score);

        sim.key_down("Spacebar");
        assert!(!sim.is_paused());
        sim.step(1000.0);
        assert_ne!(sim.ball().pos, ball.pos);
    }

    #[test]
    fn test_arrows_ignored_outside_play() {
        let mut sim = GameSimulation::new(Config::new(), 1).expect("valid config");
        assert!(!sim.key_down("ArrowLeft"));
        let play = sim.layout().play;
        sim.click_at(play.min);
        sim.step(16.0);
        assert_eq!(sim.paddle().speed, 0.0, "hold flag was not set from the menu");
    }

    #[test]
    fn test_space_ignored_outside_play() {
        let mut sim = GameSimulation::new(Config::new(), 1).expect("valid config");
        assert!(!sim.key_down(" "));
        assert!(!sim.is_paused());

        let layout = *sim.layout();
        sim.click_at(layout.scoreboard.min);
        assert_eq!(sim.state(), GameState::Scoreboard);
        assert!(!sim.key_down(" "));
        assert!(!sim.is_paused());

        // A pause left by Escape survives Space on the menu
        let mut sim = playing_sim();
        sim.key_down("Escape");
        assert!(sim.is_paused());
        assert!(!sim.key_down(" "));
        assert!(sim.is_paused());
        assert_eq!(sim.state(), GameState::Menu);
    }

    #[test]
    fn test_key_up_clears_hold_in_menu() {
        let mut sim = playing_sim();
        sim.key_down("Left");
        sim.key_down("Escape");
        sim.key_up("Left");
        let play = sim.layout().play;
        sim.click_at(play.max);
        sim.key_down(" "); // Unpause after Escape
        let x = sim.paddle().x;
        sim.step(16.0);
        assert_eq!(sim.paddle().x, x);
    }

    #[test]
    fn test_escape_pauses_and_continue_keeps_pause() {
        let mut sim = playing_sim();
        assert!(!sim.key_down("Escape"));
        assert_eq!(sim.state(), GameState::Menu);
        assert!(sim.is_paused());

        match sim.frame().scene {
            Scene::Menu { play, .. } => assert_eq!(play.label, "CONTINUE"),
            other => panic!("expected menu, got {other:?}"),
        }

        let play = sim.layout().play;
        sim.click_at(play.min);
        assert_eq!(sim.state(), GameState::Playing);
        assert!(sim.is_paused());
    }

    #[test]
    fn test_scoreboard_round_trip() {
        let mut sim = GameSimulation::new(Config::new(), 1).expect("valid config");
        let layout = *sim.layout();

        sim.click_at(layout.scoreboard.min);
        assert_eq!(sim.state(), GameState::Scoreboard);
        match sim.step(0.0).scene {
            Scene::Scoreboard {
                highscores, back, ..
            } => {
                assert!(highscores.is_empty());
                assert_eq!(back.label, "BACK");
            }
            other => panic!("expected scoreboard, got {other:?}"),
        }

        // Play button region does nothing here
        sim.click_at((layout.play.min + layout.play.max) * 0.5);
        assert_eq!(sim.state(), GameState::Scoreboard);

        sim.click_at(layout.back.max);
        assert_eq!(sim.state(), GameState::Menu);

        sim.click_at(layout.scoreboard.max);
        sim.key_down("Escape");
        assert_eq!(sim.state(), GameState::Menu);
    }

    #[test]
    fn test_click_outside_buttons_ignored() {
        let mut sim = GameSimulation::new(Config::new(), 1).expect("valid config");
        sim.click_at(Vec2::new(5.0, 5.0));
        assert_eq!(sim.state(), GameState::Menu);
    }

    #[test]
    fn test_drop_returns_to_menu_when_configured() {
        let config = Config {
            menu_on_drop: true,
            ..Config::default()
        };
        let mut sim = GameSimulation::new(config, 3).expect("valid config");
        let play = sim.layout().play;
        sim.click_at(play.min);

        let height = sim.config().table_height;
        sim.set_ball(Ball::new(Vec2::new(100.0, height - 5.0), Vec2::new(0.0, 6.0)));
        let frame = sim.step(16.0);

        assert!(sim.events().run_ended);
        assert_eq!(sim.state(), GameState::Menu);
        assert!(!sim.game_in_progress());
        assert!(!frame.is_playing());
    }

    #[test]
    fn test_playing_frame_matches_state() {
        let mut sim = playing_sim();
        let frame = sim.step(16.0);
        let ball = sim.ball();
        let config = sim.config().clone();

        assert_eq!(frame.width, config.table_width);
        match frame.scene {
            Scene::Playing {
                ball: circle,
                paddle,
                score,
                highscore,
                paused,
            } => {
                assert_eq!((circle.x, circle.y), (ball.pos.x, ball.pos.y));
                assert_eq!(circle.radius, config.ball_radius);
                assert_eq!(paddle.x, config.paddle_start_x());
                assert_eq!(paddle.y, config.paddle_top());
                assert_eq!(score, 0);
                assert_eq!(highscore, 0);
                assert!(!paused);
            }
            other => panic!("expected table, got {other:?}"),
        }
    }
}
