//! Frame clocks

use super::FrameClock;
use crate::consts::MAX_FRAME_TIME;

/// Clock reporting a fixed delta; hosts overwrite it once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep(pub f32);

impl FixedStep {
    /// 60 Hz step, used by the headless runner and tests
    pub const SIXTY_HZ: FixedStep = FixedStep(1.0 / 60.0);

    /// Build from a measured delta, clamped to `[0, MAX_FRAME_TIME]`
    pub fn measured(dt: f32) -> Self {
        if dt.is_finite() {
            Self(dt.clamp(0.0, MAX_FRAME_TIME))
        } else {
            Self(0.0)
        }
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::SIXTY_HZ
    }
}

impl FrameClock for FixedStep {
    fn frame_time(&self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_clamps() {
        assert_eq!(FixedStep::measured(2.0).frame_time(), MAX_FRAME_TIME);
        assert_eq!(FixedStep::measured(-1.0).frame_time(), 0.0);
        assert_eq!(FixedStep::measured(f32::NAN).frame_time(), 0.0);
        assert_eq!(FixedStep::measured(0.016).frame_time(), 0.016);
    }
}
