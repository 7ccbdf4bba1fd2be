//! Movement domain: motion control plugin wiring and public exports.

mod components;
mod events;
mod resources;
mod smoothing;
mod spawn;
mod systems;

#[cfg(feature = "dev-tools")]
mod dev;

#[cfg(test)]
mod tests;

pub use components::{
    CheckPoints, CrouchColliderLink, Facing, GameLayer, Ground, MotionState, Player, UpperBody,
};
pub use events::{CrouchChanged, Landed};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::movement::spawn::spawn_player;
use crate::movement::systems::{apply_movement, read_input, refresh_grounded};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<Landed>()
            .add_message::<CrouchChanged>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_input)
            .add_systems(FixedUpdate, (refresh_grounded, apply_movement).chain());

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_cavern);
    }
}
