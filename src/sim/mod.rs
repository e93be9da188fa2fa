//! Gameplay simulation module
//!
//! All gameplay logic lives here. This module has no rendering or platform
//! dependencies beyond the collaborator traits in [`crate::platform`]:
//! - Time only enters through the frame delta
//! - Seeded RNG only
//! - Orbs kept in spawn order

pub mod autopilot;
pub mod collision;
pub mod orb;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_overlap};
pub use orb::{Orb, OrbColor};
pub use player::Player;
pub use state::{Game, GamePhase, MatchStats};
pub use tick::FrameInput;
