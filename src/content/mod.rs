//! Content domain: data-driven player definition loading.

mod data;
mod loader;

pub use data::{CrouchColliderDef, MovementTuningDef, PlayerDef};
pub use loader::{ContentLoadError, load_player_def};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Load the player definition before anything spawns, falling back to the
/// compiled defaults when the file is missing or malformed.
fn load_content(mut commands: Commands, mut tuning: ResMut<MovementTuning>) {
    let def = match load_player_def(Path::new("assets/data")) {
        Ok(def) => {
            info!("Loaded player definition");
            def
        }
        Err(e) => {
            warn!("{}; using the default player definition", e);
            PlayerDef::default()
        }
    };

    *tuning = def.movement.clone().into_tuning();
    commands.insert_resource(def);
}
