//! Game state and match lifecycle
//!
//! Everything a match needs lives in [`Game`]: phase, score, paddle, orbs,
//! spawn pacing and the seeded RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::orb::{Orb, OrbColor};
use super::player::Player;
use crate::platform::{Canvas, Font};
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    #[default]
    Menu,
    /// Active match
    Playing,
    /// Score dropped below the threshold
    GameOver,
}

/// Per-match counters (reported in logs and on the game over screen)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Orbs created
    pub spawned: u32,
    /// Orbs caught with the matching target color
    pub caught: u32,
    /// Orbs caught with the wrong target color
    pub wrong: u32,
    /// Orbs that fell past the paddle untouched
    pub dropped: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    /// Screen size, fixed at construction
    screen: Vec2,
    /// Seed the RNG was created from
    seed: u64,
    rng: Pcg32,
    /// Acquired in `start()`
    font: Option<Font>,

    /// Current phase
    pub phase: GamePhase,
    /// Score (goes negative on mismatches)
    pub score: i32,
    /// Seconds since the last spawn
    spawn_timer: f32,
    /// Seconds between spawns, shrinks after each spawn down to the floor
    spawn_interval: f32,
    /// Orbs in play, oldest first
    pub orbs: Vec<Orb>,
    /// Player paddle
    pub player: Player,
    pub stats: MatchStats,
}

impl Game {
    /// Create a game in the menu phase
    pub fn new(settings: Settings, seed: u64) -> Self {
        let settings = settings.sanitized();
        let screen = Vec2::new(settings.screen_width, settings.screen_height);
        let player = Player::new(
            Vec2::ZERO,
            Vec2::new(settings.player_width, settings.player_height),
            settings.player_speed,
        );

        let mut game = Self {
            screen,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            font: None,
            phase: GamePhase::Menu,
            score: 0,
            spawn_timer: 0.0,
            spawn_interval: settings.initial_spawn_interval,
            orbs: Vec::new(),
            player,
            stats: MatchStats::default(),
            settings,
        };
        let start = game.player_start_pos();
        game.player.reset(start);
        game
    }

    /// Host calls this once before the first frame
    pub fn start(&mut self, canvas: &mut impl Canvas) {
        self.font = Some(canvas.default_font());
        self.phase = GamePhase::Menu;
        log::info!(
            "Game started ({}x{}, seed {})",
            self.screen.x,
            self.screen.y,
            self.seed
        );
    }

    /// Host calls this once at shutdown
    pub fn finish(&mut self) {
        // Only the backend's default font is used; nothing to release
        self.font = None;
        log::info!("Game finished");
    }

    /// Start a fresh match: zero score, no orbs, default pacing, centered paddle
    pub fn reset_match(&mut self) {
        self.score = 0;
        self.orbs.clear();
        self.spawn_timer = 0.0;
        self.spawn_interval = self.settings.initial_spawn_interval;
        self.stats = MatchStats::default();
        let start = self.player_start_pos();
        self.player.reset(start);
        log::info!("Match reset");
    }

    /// Paddle position at match start: horizontally centered near the bottom
    pub fn player_start_pos(&self) -> Vec2 {
        Vec2::new(
            (self.screen.x - self.player.size.x) / 2.0,
            self.screen.y - self.settings.player_bottom_offset,
        )
    }

    /// Spawn an orb of random color at a random X inside the spawn margins
    pub fn spawn_orb(&mut self) {
        let margin = self.settings.spawn_margin;
        let min_x = margin.round() as i32;
        let max_x = ((self.screen.x - margin).round() as i32).max(min_x);
        let x = self.rng.random_range(min_x..=max_x) as f32;
        let color = OrbColor::from_index(self.rng.random_range(0..=2u32));

        self.spawn_orb_at(Vec2::new(x, self.settings.orb_spawn_y), color);
    }

    /// Spawn an orb with explicit position and color
    pub fn spawn_orb_at(&mut self, pos: Vec2, color: OrbColor) {
        self.orbs.push(Orb::new(
            pos,
            self.settings.orb_radius,
            color,
            self.settings.orb_fall_speed,
        ));
        self.stats.spawned += 1;
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        crate::renderer::scene::draw(self, canvas);
    }

    #[inline]
    pub fn screen_size(&self) -> Vec2 {
        self.screen
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn font(&self) -> Font {
        self.font.unwrap_or_default()
    }

    #[inline]
    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    #[inline]
    pub fn spawn_interval(&self) -> f32 {
        self.spawn_interval
    }

    /// Advance the spawn clock; returns true when an orb should be spawned.
    /// Shrinks the interval on every spawn, never below the floor.
    pub(super) fn advance_spawn_timer(&mut self, dt: f32) -> bool {
        self.spawn_timer += dt;
        if self.spawn_timer < self.spawn_interval {
            return false;
        }
        self.spawn_timer = 0.0;
        self.spawn_interval = (self.spawn_interval * self.settings.spawn_decay)
            .max(self.settings.min_spawn_interval);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_game_in_menu() {
        let game = Game::new(Settings::default(), 1);
        assert_eq!(game.phase, GamePhase::Menu);
        assert_eq!(game.score, 0);
        assert!(game.orbs.is_empty());
        assert_eq!(game.spawn_interval(), INITIAL_SPAWN_INTERVAL);
        assert_eq!(game.player.pos, Vec2::new(350.0, 550.0));
    }

    #[test]
    fn test_reset_match() {
        let mut game = Game::new(Settings::default(), 1);
        game.phase = GamePhase::Playing;
        game.score = -15;
        game.spawn_orb();
        game.spawn_orb();
        game.player.pos.x = 0.0;
        for _ in 0..50 {
            game.advance_spawn_timer(1.0);
        }
        game.spawn_timer = 0.3;
        assert!(game.spawn_interval() < INITIAL_SPAWN_INTERVAL);

        game.reset_match();
        assert_eq!(game.score, 0);
        assert!(game.orbs.is_empty());
        assert_eq!(game.spawn_interval(), 1.5);
        assert_eq!(game.spawn_timer(), 0.0);
        assert_eq!(game.player.pos, game.player_start_pos());
        assert_eq!(game.stats, MatchStats::default());
    }

    #[test]
    fn test_spawn_within_margins() {
        let mut game = Game::new(Settings::default(), 777);
        for _ in 0..500 {
            game.spawn_orb();
        }
        for orb in &game.orbs {
            assert!(orb.pos.x >= ORB_SPAWN_MARGIN);
            assert!(orb.pos.x <= SCREEN_WIDTH - ORB_SPAWN_MARGIN);
            assert_eq!(orb.pos.y, ORB_SPAWN_Y);
            assert_eq!(orb.radius(), ORB_RADIUS);
            assert!(orb.active);
        }
        // All three colors show up
        for color in OrbColor::ALL {
            assert!(game.orbs.iter().any(|o| o.color() == color));
        }
        assert_eq!(game.stats.spawned, 500);
    }

    #[test]
    fn test_spawn_interval_shrinks_to_floor() {
        let mut game = Game::new(Settings::default(), 1);
        assert!(!game.advance_spawn_timer(1.0));
        assert!(game.advance_spawn_timer(0.5));
        assert_eq!(game.spawn_timer(), 0.0);
        assert!((game.spawn_interval() - 1.485).abs() < 1e-5);

        for _ in 0..1000 {
            game.advance_spawn_timer(10.0);
        }
        assert_eq!(game.spawn_interval(), MIN_SPAWN_INTERVAL);
    }
}
