//! WASM bindings for a browser scoreboard

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{MatchScorer, ScoreSnapshot};

/// A set in progress, driven from JavaScript
#[wasm_bindgen]
pub struct WasmMatch {
    inner: MatchScorer,
}

#[wasm_bindgen]
impl WasmMatch {
    /// Start or resume a set
    ///
    /// # Arguments
    /// * `player_one` / `player_two` - Labels used for `pointWonBy`
    /// * `snapshot_json` - Optional `{"games_won": {...}, "current_game": {...}}`
    #[wasm_bindgen(constructor)]
    pub fn new(
        player_one: &str,
        player_two: &str,
        snapshot_json: Option<String>,
    ) -> Result<WasmMatch, JsError> {
        let snapshot = match snapshot_json {
            Some(json) => serde_json::from_str::<ScoreSnapshot>(&json)
                .map_err(|e| JsError::new(&format!("Invalid snapshot: {}", e)))?,
            None => ScoreSnapshot::default(),
        };
        let inner = MatchScorer::resume(player_one, player_two, snapshot)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmMatch { inner })
    }

    #[wasm_bindgen(js_name = pointWonBy)]
    pub fn point_won_by(&mut self, player: &str) -> Result<(), JsError> {
        self.inner
            .point_won_by(player)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn score(&self) -> String {
        self.inner.score()
    }

    #[wasm_bindgen(getter, js_name = matchWon)]
    pub fn match_won(&self) -> bool {
        self.inner.match_won()
    }

    /// `"REGULAR"` or `"TIEBREAK"`
    #[wasm_bindgen(getter, js_name = scoringMode)]
    pub fn scoring_mode(&self) -> String {
        self.inner.scoring_mode().to_string()
    }

    /// Current tallies as a JS object, for resuming later
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}
