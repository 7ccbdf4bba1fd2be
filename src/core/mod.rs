//! Core domain: app setup and persisted profile.

mod profile;
mod systems;

pub use profile::{PlayerProfile, ProfileError, ProfilePath};

use bevy::prelude::*;

use crate::core::systems::{autosave_profile, load_profile, record_motion_stats, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProfilePath>()
            .init_resource::<PlayerProfile>()
            .add_systems(Startup, (setup_camera, load_profile))
            .add_systems(Update, (record_motion_stats, autosave_profile).chain());

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, systems::reset_profile_on_key);
    }
}
