//! Data definitions for the RON player file.
//!
//! These structs mirror the structure in assets/data/player.ron and are
//! used for deserialization.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

/// Root structure of assets/data/player.ron.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct PlayerDef {
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub body_width: f32,
    pub body_height: f32,
    pub mass: f32,
    /// Upper-body collider switched off while crouching. Absence is a legal
    /// configuration; the controller then skips the toggle.
    pub crouch_collider: Option<CrouchColliderDef>,
    pub ground_check_offset_y: f32,
    pub ceiling_check_offset_y: f32,
    pub ground_check_radius: f32,
    pub ceiling_check_radius: f32,
    pub movement: MovementTuningDef,
}

/// Overlap-check radius as a fraction of body height, used for the compiled
/// defaults when the content file does not say otherwise.
const CHECK_RADIUS_FACTOR: f32 = 0.2;

impl Default for PlayerDef {
    fn default() -> Self {
        let body_height = 48.0;
        Self {
            spawn_x: 0.0,
            spawn_y: -60.0,
            body_width: 24.0,
            body_height,
            mass: 1.0,
            crouch_collider: Some(CrouchColliderDef {
                width: 24.0,
                height: 24.0,
                offset_y: 12.0,
            }),
            ground_check_offset_y: -(body_height / 2.0 + 2.0),
            ceiling_check_offset_y: body_height / 2.0 + 2.0,
            ground_check_radius: CHECK_RADIUS_FACTOR * body_height,
            ceiling_check_radius: CHECK_RADIUS_FACTOR * body_height,
            movement: MovementTuningDef::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrouchColliderDef {
    pub width: f32,
    pub height: f32,
    pub offset_y: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementTuningDef {
    pub jump_force: f32,
    pub movement_smoothing: f32,
    pub air_control: bool,
    pub run_speed: f32,
}

impl Default for MovementTuningDef {
    fn default() -> Self {
        let tuning = MovementTuning::default();
        Self {
            jump_force: tuning.jump_force,
            movement_smoothing: tuning.movement_smoothing,
            air_control: tuning.air_control,
            run_speed: tuning.run_speed,
        }
    }
}

impl MovementTuningDef {
    /// Convert to the runtime resource, clamping the smoothing constant into
    /// its valid range.
    pub fn into_tuning(self) -> MovementTuning {
        let mut smoothing = self.movement_smoothing;
        if !(0.0..=0.3).contains(&smoothing) {
            warn!(
                "movement_smoothing {} outside 0.0..=0.3, clamping",
                smoothing
            );
            smoothing = smoothing.clamp(0.0, 0.3);
        }
        MovementTuning {
            jump_force: self.jump_force,
            movement_smoothing: smoothing,
            air_control: self.air_control,
            run_speed: self.run_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_player_def_check_radii_scale_with_body() {
        let def = PlayerDef::default();
        assert_eq!(def.ground_check_radius, 0.2 * def.body_height);
        assert_eq!(def.ceiling_check_radius, 0.2 * def.body_height);
    }

    #[test]
    fn into_tuning_keeps_valid_smoothing() {
        let def = MovementTuningDef {
            movement_smoothing: 0.25,
            ..MovementTuningDef::default()
        };
        assert_eq!(def.into_tuning().movement_smoothing, 0.25);
    }

    #[test]
    fn into_tuning_clamps_out_of_range_smoothing() {
        let high = MovementTuningDef {
            movement_smoothing: 0.9,
            ..MovementTuningDef::default()
        };
        assert_eq!(high.into_tuning().movement_smoothing, 0.3);

        let negative = MovementTuningDef {
            movement_smoothing: -0.1,
            ..MovementTuningDef::default()
        };
        assert_eq!(negative.into_tuning().movement_smoothing, 0.0);
    }
}
