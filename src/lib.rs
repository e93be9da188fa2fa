//! Orb Catcher - A falling-orb color matching arcade game
//!
//! Core modules:
//! - `sim`: Gameplay state machine (orbs, paddle, scoring, spawning)
//! - `platform`: Input, timing and drawing contracts the host provides
//! - `renderer`: Draw list tessellation and WebGPU pipeline
//! - `settings`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{Game, GamePhase};

/// Game configuration constants
pub mod consts {
    /// Default window dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    /// Distance from the bottom of the screen to the paddle's top edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 50.0;
    /// Horizontal paddle speed (pixels/s)
    pub const PLAYER_SPEED: f32 = 400.0;

    /// Orb defaults
    pub const ORB_RADIUS: f32 = 15.0;
    /// Fall speed (pixels/s)
    pub const ORB_FALL_SPEED: f32 = 150.0;
    /// Orbs start slightly above the visible area
    pub const ORB_SPAWN_Y: f32 = -20.0;
    /// Horizontal margin kept free when picking a spawn X
    pub const ORB_SPAWN_MARGIN: f32 = 20.0;

    /// Spawn pacing
    pub const INITIAL_SPAWN_INTERVAL: f32 = 1.5;
    pub const MIN_SPAWN_INTERVAL: f32 = 0.5;
    /// Multiplier applied to the interval after each spawn (1% faster)
    pub const SPAWN_DECAY: f32 = 0.99;

    /// Scoring
    pub const CATCH_REWARD: i32 = 10;
    pub const MISS_PENALTY: i32 = 5;
    /// Score strictly below this ends the match
    pub const GAME_OVER_SCORE: i32 = -20;

    /// Host frame delta cap (seconds); a stalled tab must not teleport orbs
    pub const MAX_FRAME_TIME: f32 = 0.1;
}

/// RGBA colors shared by the simulation and the renderer
pub mod palette {
    pub const RED: [f32; 4] = [0.902, 0.161, 0.216, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 0.894, 0.188, 1.0];
    pub const BLUE: [f32; 4] = [0.0, 0.475, 0.945, 1.0];
    pub const YELLOW: [f32; 4] = [0.992, 0.976, 0.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const LIGHT_GRAY: [f32; 4] = [0.784, 0.784, 0.784, 1.0];
    pub const DARK_BLUE: [f32; 4] = [0.0, 0.322, 0.675, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
}
