mod clock;
mod engine;
mod event_queue;
mod game_match;
mod player;
mod prng;
mod traits;
mod types;

use engine::Engine;
use player::{PlayerState, SortKey};
use rand::Rng;
use types::{Algorithm, MatchSetting, WorldSetting};
use wasm_bindgen::prelude::*;

/// Draws a fresh seed from the host's entropy source (`getrandom`, backed by
/// the browser's `crypto` API under the `js` feature on `wasm32`). The
/// engine's own simulation randomness never touches this path — see
/// `prng::Prng` — this is only for hosts that don't want to pick a seed
/// themselves.
#[wasm_bindgen]
pub fn random_seed() -> u64 {
    rand::thread_rng().gen()
}

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_algorithm(name: &str) -> Algorithm {
    match name {
        "lifo" | "LIFO" => Algorithm::Lifo,
        "skill_based" | "SkillBased" => Algorithm::SkillBased,
        "trait_grouping" | "TraitGrouping" => Algorithm::TraitGrouping,
        _ => Algorithm::Fifo,
    }
}

/// WASM-exposed simulation wrapper
#[wasm_bindgen]
pub struct SimulationEngine {
    engine: Engine,
}

#[wasm_bindgen]
impl SimulationEngine {
    /// Create a new engine with default settings and the given algorithm.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64, algorithm: &str) -> SimulationEngine {
        SimulationEngine {
            engine: Engine::new(parse_algorithm(algorithm), seed),
        }
    }

    /// Create with custom world/match settings supplied as JSON.
    pub fn new_with_config(
        seed: u64,
        algorithm: &str,
        world_setting_json: &str,
        match_setting_json: &str,
    ) -> Result<SimulationEngine, JsValue> {
        let world: WorldSetting = serde_json::from_str(world_setting_json)
            .map_err(|e| JsValue::from_str(&format!("world setting parse error: {e}")))?;
        let matches: MatchSetting = serde_json::from_str(match_setting_json)
            .map_err(|e| JsValue::from_str(&format!("match setting parse error: {e}")))?;
        let mut engine = Engine::new(parse_algorithm(algorithm), seed);
        engine.set_world_setting(world);
        engine.set_match_setting(matches);
        Ok(SimulationEngine { engine })
    }

    /// Enqueue `n` players for creation, throttled by the configured batch
    /// rate over subsequent ticks.
    pub fn add_to_creation_queue(&mut self, n: i64) {
        self.engine.add_to_creation_queue(n);
    }

    /// Replace the world settings wholesale, from JSON.
    pub fn set_world_setting(&mut self, json: &str) -> Result<(), JsValue> {
        let w: WorldSetting =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.engine.set_world_setting(w);
        Ok(())
    }

    /// Replace the match settings wholesale, from JSON.
    pub fn set_match_setting(&mut self, json: &str) -> Result<(), JsValue> {
        let m: MatchSetting =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.engine.set_match_setting(m);
        Ok(())
    }

    /// Run a single tick.
    pub fn tick(&mut self) {
        self.engine.tick();
    }

    /// Run `n` ticks back to back.
    pub fn run(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.engine.tick();
        }
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.engine.set_scale(scale);
    }

    pub fn pause(&mut self) {
        self.engine.pause();
    }

    pub fn resume(&mut self) {
        self.engine.resume();
    }

    pub fn now_ms(&self) -> u64 {
        self.engine.now_ms()
    }

    pub fn total_players(&self) -> usize {
        self.engine.players().len()
    }

    pub fn num_players_in_state(&self, state: &str) -> usize {
        let Some(state) = parse_state(state) else {
            return 0;
        };
        self.engine.num_players_in_state(state)
    }

    pub fn avg_queue_time(&self) -> f64 {
        self.engine.avg_queue_time()
    }

    /// Current player-state histogram, as JSON.
    pub fn state_histogram(&self) -> String {
        serde_json::json!({
            "offline": self.engine.num_players_in_state(PlayerState::Offline),
            "online": self.engine.num_players_in_state(PlayerState::Online),
            "in_queue": self.engine.num_players_in_state(PlayerState::InQueue),
            "in_game": self.engine.num_players_in_state(PlayerState::InGame),
            "disconnected": self.engine.num_players_in_state(PlayerState::Disconnected),
            "rejoining": self.engine.num_players_in_state(PlayerState::Rejoining),
        })
        .to_string()
    }

    /// One player's full state, as JSON, or `"null"` if the id is unknown.
    pub fn get_player(&self, id: usize) -> String {
        match self.engine.player(id) {
            Some(p) => serde_json::to_string(p).unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }

    /// Top (or bottom, if `ascending`) players under a sort key, as JSON.
    pub fn sorted_players(&self, sort_key: &str, ascending: bool) -> String {
        let Some(key) = parse_sort_key(sort_key) else {
            return "[]".to_string();
        };
        serde_json::to_string(self.engine.sorted_players(key, ascending)).unwrap_or_else(|_| "[]".to_string())
    }

    /// Count of currently-incomplete draft pools.
    pub fn num_drafted_pools(&self) -> usize {
        self.engine.drafted_pools().len()
    }

    /// Count of currently-ongoing matches.
    pub fn num_ongoing_matches(&self) -> usize {
        self.engine.ongoing_match_ids().len()
    }
}

fn parse_state(s: &str) -> Option<PlayerState> {
    match s {
        "offline" => Some(PlayerState::Offline),
        "online" => Some(PlayerState::Online),
        "in_queue" => Some(PlayerState::InQueue),
        "in_game" => Some(PlayerState::InGame),
        "disconnected" => Some(PlayerState::Disconnected),
        "rejoining" => Some(PlayerState::Rejoining),
        _ => None,
    }
}

fn parse_sort_key(s: &str) -> Option<SortKey> {
    match s {
        "win_rate" => Some(SortKey::WinRate),
        "aggressiveness" => Some(SortKey::Aggressiveness),
        "flexibility" => Some(SortKey::Flexibility),
        "grit" => Some(SortKey::Grit),
        "endurance" => Some(SortKey::Endurance),
        "instinct" => Some(SortKey::Instinct),
        "creativity" => Some(SortKey::Creativity),
        "precision" => Some(SortKey::Precision),
        "total_score" => Some(SortKey::TotalScore),
        _ => None,
    }
}
