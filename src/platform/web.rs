//! Browser binding
//!
//! Exposes the frame/input entry points to a JavaScript host. Drawing stays
//! in JS: it reads `snapshot_json()` each frame and `drain_events_json()`
//! for score/state changes.

use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // Already initialized if the module is instantiated twice
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Wall Pong starting...");
}

/// Game handle owned by the JS host
#[wasm_bindgen]
pub struct WebGame {
    game: Game,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game, optionally overriding settings with JSON text
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<WebGame, JsValue> {
        let settings = match settings_json {
            Some(json) => Settings::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Settings::default(),
        };
        log::info!("Arena {}x{}", settings.width, settings.height);
        Ok(WebGame {
            game: Game::new(settings),
        })
    }

    /// Call from `requestAnimationFrame` with the timestamp in milliseconds
    pub fn on_frame(&mut self, timestamp_ms: f64) {
        self.game.on_frame(timestamp_ms / 1000.0);
    }

    /// Touch/pointer down at arena y (y up)
    pub fn on_input_start(&mut self, y: f64) {
        self.game.on_input_start(y);
    }

    /// Several touches in one event, processed in order
    pub fn on_inputs_start(&mut self, ys: Vec<f64>) {
        self.game.on_inputs_start(&ys);
    }

    pub fn on_input_end(&mut self) {
        self.game.on_input_end();
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.game.snapshot()).unwrap_or_default()
    }

    /// Wall rectangles; static, so fetch once
    pub fn walls_json(&self) -> String {
        serde_json::to_string(self.game.walls()).unwrap_or_default()
    }

    pub fn drain_events_json(&mut self) -> String {
        serde_json::to_string(&self.game.drain_events()).unwrap_or_default()
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }
}
