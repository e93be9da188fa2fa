//! Game settings and balance
//!
//! Every field is optional in the JSON document; missing ones take the
//! compile-time defaults from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming a JSON settings file (native only)
pub const SETTINGS_ENV: &str = "ORB_CATCHER_SETTINGS";

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Paddle ===
    /// Horizontal speed (pixels/s)
    pub player_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Distance from the bottom edge to the paddle's top edge
    pub player_bottom_offset: f32,

    // === Orbs ===
    pub orb_radius: f32,
    /// Fall speed (pixels/s)
    pub orb_fall_speed: f32,
    pub orb_spawn_y: f32,
    pub spawn_margin: f32,

    // === Pacing ===
    pub initial_spawn_interval: f32,
    pub min_spawn_interval: f32,
    /// Interval multiplier applied after every spawn
    pub spawn_decay: f32,

    // === Scoring ===
    pub catch_reward: i32,
    pub miss_penalty: i32,
    /// Score strictly below this ends the match
    pub game_over_score: i32,

    /// RNG seed; `None` lets the host pick one
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            player_speed: PLAYER_SPEED,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,

            orb_radius: ORB_RADIUS,
            orb_fall_speed: ORB_FALL_SPEED,
            orb_spawn_y: ORB_SPAWN_Y,
            spawn_margin: ORB_SPAWN_MARGIN,

            initial_spawn_interval: INITIAL_SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            spawn_decay: SPAWN_DECAY,

            catch_reward: CATCH_REWARD,
            miss_penalty: MISS_PENALTY,
            game_over_score: GAME_OVER_SCORE,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse a JSON document (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of numbers, serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Replace values that would break the game with the defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Settings::default();

        let positive = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };

        self.screen_width = positive(self.screen_width, defaults.screen_width);
        self.screen_height = positive(self.screen_height, defaults.screen_height);
        self.player_speed = positive(self.player_speed, defaults.player_speed);
        self.player_width = positive(self.player_width, defaults.player_width)
            .min(self.screen_width);
        self.player_height = positive(self.player_height, defaults.player_height);
        self.orb_radius = positive(self.orb_radius, defaults.orb_radius);
        self.orb_fall_speed = positive(self.orb_fall_speed, defaults.orb_fall_speed);
        self.min_spawn_interval = positive(self.min_spawn_interval, defaults.min_spawn_interval);
        self.initial_spawn_interval =
            positive(self.initial_spawn_interval, defaults.initial_spawn_interval)
                .max(self.min_spawn_interval);

        if !(self.spawn_decay > 0.0 && self.spawn_decay <= 1.0) {
            self.spawn_decay = defaults.spawn_decay;
        }
        if !self.player_bottom_offset.is_finite() {
            self.player_bottom_offset = defaults.player_bottom_offset;
        }
        if !self.orb_spawn_y.is_finite() {
            self.orb_spawn_y = defaults.orb_spawn_y;
        }
        // Spawn range must stay non-empty
        if !self.spawn_margin.is_finite()
            || self.spawn_margin < 0.0
            || self.spawn_margin * 2.0 > self.screen_width
        {
            self.spawn_margin = defaults.spawn_margin.min(self.screen_width / 2.0);
        }

        // A catch always gains, a mismatch never gains, a fresh match is not lost
        if self.catch_reward <= 0 {
            self.catch_reward = defaults.catch_reward;
        }
        if self.miss_penalty < 0 {
            self.miss_penalty = defaults.miss_penalty;
        }
        if self.game_over_score > 0 {
            self.game_over_score = defaults.game_over_score;
        }

        self
    }

    /// Load settings from the file named by `ORB_CATCHER_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {} - using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read settings file {}: {} - using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Browser build has no settings source
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "orb_fall_speed": 300.0, "seed": 7 }"#).unwrap();
        assert_eq!(settings.orb_fall_speed, 300.0);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.initial_spawn_interval, INITIAL_SPAWN_INTERVAL);
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "catch_reward": "ten" }"#).is_err());
    }

    #[test]
    fn test_sanitize_rejects_nonsense() {
        let settings = Settings::from_json(
            r#"{
                "player_speed": -5.0,
                "spawn_decay": 1.5,
                "min_spawn_interval": 2.0,
                "initial_spawn_interval": 1.0
            }"#,
        )
        .unwrap();
        assert_eq!(settings.player_speed, PLAYER_SPEED);
        assert_eq!(settings.spawn_decay, SPAWN_DECAY);
        // Initial interval raised to the floor
        assert_eq!(settings.min_spawn_interval, 2.0);
        assert_eq!(settings.initial_spawn_interval, 2.0);
    }

    #[test]
    fn test_sanitize_scoring() {
        let settings = Settings::from_json(
            r#"{ "catch_reward": -10, "miss_penalty": -5, "game_over_score": 30 }"#,
        )
        .unwrap();
        assert_eq!(settings.catch_reward, CATCH_REWARD);
        assert_eq!(settings.miss_penalty, MISS_PENALTY);
        assert_eq!(settings.game_over_score, GAME_OVER_SCORE);

        // Large but sane values are kept
        let settings =
            Settings::from_json(r#"{ "catch_reward": 2147483647, "miss_penalty": 0 }"#).unwrap();
        assert_eq!(settings.catch_reward, i32::MAX);
        assert_eq!(settings.miss_penalty, 0);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            seed: Some(42),
            ..Default::default()
        };
        let parsed = Settings::from_json(&settings.to_json()).unwrap();
        assert_eq!(parsed, settings);
    }
}
