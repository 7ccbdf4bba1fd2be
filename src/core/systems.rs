//! Core domain: camera setup, profile persistence, motion stat tracking.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::profile::{PlayerProfile, ProfilePath};
use crate::movement::{CrouchChanged, Landed};

/// Seconds between profile writes once a change is pending.
const AUTOSAVE_DEBOUNCE: f32 = 5.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Load the persisted profile, keeping defaults when none exists yet.
pub(crate) fn load_profile(path: Res<ProfilePath>, mut profile: ResMut<PlayerProfile>) {
    match PlayerProfile::load(&path.0) {
        Ok(loaded) => {
            info!(
                "Loaded profile: {} landings, {} crouches",
                loaded.landings, loaded.crouches
            );
            *profile = loaded;
        }
        Err(e) => {
            info!("{}; starting with a fresh profile", e);
        }
    }
}

/// Accumulate motion notifications into the profile.
pub(crate) fn record_motion_stats(
    mut profile: ResMut<PlayerProfile>,
    mut landed: MessageReader<Landed>,
    mut crouched: MessageReader<CrouchChanged>,
) {
    for _ in landed.read() {
        profile.landings += 1;
    }

    for message in crouched.read() {
        if message.crouching {
            profile.crouches += 1;
        }
    }
}

/// Write the profile back at most once per debounce window.
pub(crate) fn autosave_profile(
    time: Res<Time>,
    path: Res<ProfilePath>,
    profile: Res<PlayerProfile>,
    mut dirty: Local<bool>,
    mut since_save: Local<f32>,
) {
    *since_save += time.delta_secs();

    if profile.is_changed() && !profile.is_added() {
        *dirty = true;
    }

    if *dirty && *since_save >= AUTOSAVE_DEBOUNCE {
        if let Err(e) = profile.save(&path.0) {
            warn!("{}", e);
        }
        *dirty = false;
        *since_save = 0.0;
    }
}

/// Debug-only explicit profile wipe, the one sanctioned way to clear it.
#[cfg(feature = "dev-tools")]
pub(crate) fn reset_profile_on_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    path: Res<ProfilePath>,
    mut profile: ResMut<PlayerProfile>,
) {
    if keyboard.just_pressed(KeyCode::F9) {
        match profile.clear(&path.0) {
            Ok(()) => info!("Profile cleared"),
            Err(e) => warn!("{}", e),
        }
    }
}
