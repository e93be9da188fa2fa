//! Idle/demo mode - the game plays itself
//!
//! Produces the same [`FrameInput`] a keyboard would, so the simulation
//! cannot tell a bot from a human.

use super::orb::Orb;
use super::state::{Game, GamePhase};
use super::tick::FrameInput;

/// Horizontal distance (pixels) the paddle center may be off before moving
const DEAD_ZONE: f32 = 6.0;

/// Decide this frame's input from the current game state
pub fn plan(game: &Game) -> FrameInput {
    match game.phase {
        GamePhase::Menu | GamePhase::GameOver => FrameInput {
            confirm: true,
            ..Default::default()
        },
        GamePhase::Playing => plan_playing(game),
    }
}

fn plan_playing(game: &Game) -> FrameInput {
    let mut input = FrameInput::default();
    let player = &game.player;

    let target_x = match next_orb(game) {
        Some(orb) => {
            // Switch to the incoming orb's color ahead of contact
            input.cycle_color = orb.color() != player.target;
            orb.pos.x
        }
        None => game.screen_size().x / 2.0,
    };

    let offset = target_x - player.center_x();
    if offset > DEAD_ZONE {
        input.right = true;
    } else if offset < -DEAD_ZONE {
        input.left = true;
    }

    input
}

/// Lowest active orb that can still reach the paddle
fn next_orb(game: &Game) -> Option<&Orb> {
    let paddle_top = game.player.pos.y;
    game.orbs
        .iter()
        .filter(|o| o.active && o.pos.y - o.radius() <= paddle_top)
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}
