//! Browser client for the Ping-Pong game
//!
//! Owns the canvas, the DOM listeners and one `GameSimulation`. The page
//! schedules frames itself:
//!
//! ```js
//! const game = new PingPong("pingpong");
//! const loop = (t) => { game.frame(t); requestAnimationFrame(loop); };
//! requestAnimationFrame(loop);
//! // later: game.free() removes the listeners
//! ```
//!
//! Note: only compiled for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod error;
mod input;
mod listeners;
mod logger;
mod renderer;

use std::cell::RefCell;
use std::rc::Rc;

use error::ClientError;
use game_core::{Config, Frame, GameSimulation};
use listeners::EventListeners;
use renderer::{init, Renderer};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}

/// One game bound to one canvas
#[wasm_bindgen]
pub struct PingPong {
    sim: Rc<RefCell<GameSimulation>>,
    renderer: Renderer,
    last_frame: Option<Frame>,
    // Dropped with the handle, which unregisters the DOM listeners
    _listeners: EventListeners,
}

#[wasm_bindgen]
impl PingPong {
    /// Attach to the canvas with the given element id, default tuning
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<PingPong, JsValue> {
        Ok(Self::attach(canvas_id, Config::default())?)
    }

    /// Attach with tuning from a (partial) JSON config
    pub fn with_config(canvas_id: &str, config_json: &str) -> Result<PingPong, JsValue> {
        let config: Config = serde_json::from_str(config_json).map_err(ClientError::from)?;
        Ok(Self::attach(canvas_id, config)?)
    }

    /// Step the simulation and draw the result
    pub fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
        let frame = self.sim.borrow_mut().step(now_ms);
        self.renderer.draw(&frame)?;
        self.last_frame = Some(frame);
        Ok(())
    }

    /// Last drawn frame in the postcard encoding, for renderers outside Rust
    pub fn frame_bytes(&self) -> Result<Vec<u8>, JsValue> {
        let frame = match &self.last_frame {
            Some(frame) => frame.clone(),
            None => self.sim.borrow().frame(),
        };
        let bytes = frame
            .to_bytes()
            .map_err(|e| ClientError::Encode(e.to_string()))?;
        Ok(bytes)
    }

    /// Session highscores, best first
    pub fn highscores(&self) -> Vec<u32> {
        self.sim.borrow().highscores().to_vec()
    }

    /// Current screen as a string ("Menu", "Playing", "Scoreboard")
    pub fn state(&self) -> String {
        format!("{:?}", self.sim.borrow().state())
    }
}

impl PingPong {
    fn attach(canvas_id: &str, config: Config) -> Result<Self, ClientError> {
        let window = web_sys::window().ok_or(ClientError::NoWindow)?;
        let document = window.document().ok_or(ClientError::NoDocument)?;

        let canvas = init::find_canvas(&document, canvas_id)?;
        init::fit_canvas(&window, &canvas)?;
        let renderer = Renderer::new(&canvas)?;

        // The table is the canvas backing store
        let config = config.with_table_size(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let sim = Rc::new(RefCell::new(GameSimulation::new(config, seed)?));

        let listeners = EventListeners::attach(&canvas, &document, sim.clone())?;
        log::info!("Ping-Pong attached to #{canvas_id}");

        Ok(Self {
            sim,
            renderer,
            last_frame: None,
            _listeners: listeners,
        })
    }
}
