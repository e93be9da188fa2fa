//! Per-frame input handling and simulation update
//!
//! Host loop per frame: `input()` → `update()` → `draw()`.

use super::collision::circle_rect_overlap;
use super::state::{Game, GamePhase};
use crate::platform::{FrameClock, InputSource, Key};

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Confirm pressed this frame (Enter)
    pub confirm: bool,
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Cycle target color pressed this frame
    pub cycle_color: bool,
}

impl FrameInput {
    /// Sample the keys the game cares about
    pub fn poll(source: &impl InputSource) -> Self {
        Self {
            confirm: source.is_pressed(Key::Confirm),
            left: source.is_down(Key::Left),
            right: source.is_down(Key::Right),
            cycle_color: source.is_pressed(Key::CycleColor),
        }
    }
}

impl Game {
    /// Dispatch one frame of input to the active phase
    pub fn input(&mut self, input: &FrameInput, clock: &impl FrameClock) {
        match self.phase {
            GamePhase::Menu => {
                if input.confirm {
                    self.phase = GamePhase::Playing;
                    self.reset_match();
                    log::info!("Menu: confirm pressed, match starting");
                }
            }
            GamePhase::Playing => {
                let width = self.screen_size().x;
                self.player.handle_input(input, width, clock.frame_time());
            }
            GamePhase::GameOver => {
                if input.confirm {
                    self.phase = GamePhase::Menu;
                    log::info!("Game over: confirm pressed, back to menu");
                }
            }
        }
    }

    /// Advance the active phase by the clock's frame time
    pub fn update(&mut self, clock: &impl FrameClock) {
        let dt = clock.frame_time();
        match self.phase {
            // Nothing animates on the static screens
            GamePhase::Menu | GamePhase::GameOver => {}
            GamePhase::Playing => self.update_playing(dt),
        }
    }

    fn update_playing(&mut self, dt: f32) {
        if self.advance_spawn_timer(dt) {
            self.spawn_orb();
        }

        for orb in &mut self.orbs {
            orb.update(dt);
        }

        self.check_collisions();
        self.prune_orbs();

        if self.score < self.settings().game_over_score {
            self.phase = GamePhase::GameOver;
            log::info!(
                "Game over! Score {} (caught {}, wrong {}, dropped {})",
                self.score,
                self.stats.caught,
                self.stats.wrong,
                self.stats.dropped
            );
        }
    }

    /// Score every active orb touching the paddle, then deactivate it
    fn check_collisions(&mut self) {
        let paddle = self.player.rect();
        let target = self.player.target;
        let reward = self.settings().catch_reward;
        let penalty = self.settings().miss_penalty;

        for orb in self.orbs.iter_mut().filter(|o| o.active) {
            if !circle_rect_overlap(orb.pos, orb.radius(), &paddle) {
                continue;
            }

            if orb.color() == target {
                self.score = self.score.saturating_add(reward);
                self.stats.caught += 1;
                log::debug!("Caught {} orb, score {}", orb.color().label(), self.score);
            } else {
                self.score = self.score.saturating_sub(penalty);
                self.stats.wrong += 1;
                log::debug!(
                    "Wrong color: orb {} vs target {}, score {}",
                    orb.color().label(),
                    target.label(),
                    self.score
                );
            }
            orb.active = false;
        }
    }

    /// Drop inactive orbs and orbs below the screen
    fn prune_orbs(&mut self) {
        let height = self.screen_size().y;
        let dropped = self
            .orbs
            .iter()
            .filter(|o| o.active && o.is_below(height))
            .count() as u32;
        self.stats.dropped += dropped;
        self.orbs.retain(|o| !o.is_spent(height));
    }
}
