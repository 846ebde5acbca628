//! Browser bindings
//!
//! The JS frontend owns rendering and gesture capture; it forwards taps and button
//! presses here, calls `update` from `requestAnimationFrame`, and draws from the JSON
//! snapshot.

use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::persistence::LocalStorageStore;
use crate::sim::{Arena, Command};
use crate::tuning::Tuning;

#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorageStore>,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game sized to the canvas; `tuning_json` may be empty
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, tuning_json: &str) -> WebGame {
        let tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json)
        };
        WebGame {
            game: Game::new(
                Arena::new(width, height),
                tuning,
                LocalStorageStore::default(),
            ),
        }
    }

    pub fn tap(&mut self, x: f32, y: f32) -> bool {
        self.game.tap(x, y)
    }

    /// Apply a command by name ("startLevel", "tryAgain", "resetProgress", ...)
    pub fn command(&mut self, name: &str) -> bool {
        match Command::from_str(name) {
            Some(command) => self.game.command(command),
            None => {
                log::warn!("Unknown command: {}", name);
                false
            }
        }
    }

    /// Advance one tick; `dt_ms` is the frame delta in milliseconds
    pub fn update(&mut self, dt_ms: f64) {
        self.game.update((dt_ms / 1000.0) as f32);
    }

    pub fn phase(&self) -> String {
        self.game.phase().as_str().to_string()
    }

    pub fn snapshot(&self) -> String {
        self.game.snapshot().to_json().unwrap_or_else(|e| {
            log::error!("Snapshot serialization failed: {e}");
            "null".to_string()
        })
    }
}

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Quantum Flux starting...");
}
