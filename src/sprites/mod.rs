//! Sprites domain: animation state plugin wiring and exports.

mod animation;

pub use animation::{AnimationController, AnimationState};

use bevy::prelude::*;

use crate::sprites::animation::{
    advance_animation_frames, apply_player_look, drive_player_animation,
};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                drive_player_animation,
                advance_animation_frames,
                apply_player_look,
            )
                .chain(),
        );
    }
}
