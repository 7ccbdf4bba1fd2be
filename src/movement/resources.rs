//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Upward impulse magnitude applied on jump.
    pub jump_force: f32,
    /// Velocity smoothing time constant, valid range 0.0..=0.3.
    pub movement_smoothing: f32,
    /// Whether horizontal control applies while airborne.
    pub air_control: bool,
    /// Input axis to horizontal speed scale.
    pub run_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            jump_force: 680.0,
            movement_smoothing: 0.05,
            air_control: false,
            run_speed: 1600.0,
        }
    }
}

/// Input sampled on the frame tick, consumed on the fixed tick.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Last sampled horizontal value, already scaled by `run_speed`.
    pub axis: f32,
    pub crouch_held: bool,
    /// Whether the character counts as running, for the animation domain.
    pub running: bool,
    jump_latched: bool,
}

impl MovementInput {
    /// Latch a jump press. A pending latch is kept, not overwritten.
    pub(crate) fn latch_jump(&mut self) {
        self.jump_latched = true;
    }

    /// Take the pending jump request, clearing the latch unconditionally so
    /// a request is consumed exactly once.
    pub(crate) fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_latched)
    }
}
