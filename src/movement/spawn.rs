//! Movement domain: data-driven player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::PlayerDef;
use crate::movement::{
    CheckPoints, CrouchColliderLink, GameLayer, MotionState, Player, UpperBody,
};
use crate::sprites::AnimationController;

/// Spawn the player from the loaded definition. The body is split into a
/// lower collider that is always on and an upper collider that crouching
/// switches off, so a crouched character fits under low ceilings.
pub(crate) fn spawn_player(mut commands: Commands, def: Res<PlayerDef>) {
    let body_layers = CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]);
    let upper_height = def.crouch_collider.as_ref().map(|c| c.height).unwrap_or(0.0);
    let lower_height = def.body_height - upper_height;
    let lower_offset = -(def.body_height - lower_height) / 2.0;

    let mut root = commands.spawn((
        (
            Player,
            MotionState::default(),
            CheckPoints {
                ground: Vec2::new(0.0, def.ground_check_offset_y),
                ceiling: Vec2::new(0.0, def.ceiling_check_offset_y),
                ground_radius: def.ground_check_radius,
                ceiling_radius: def.ceiling_check_radius,
            },
            AnimationController {
                base_height: def.body_height,
                ..default()
            },
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(def.body_width, def.body_height)),
            ..default()
        },
        Transform::from_xyz(def.spawn_x, def.spawn_y, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Mass(def.mass),
            Friction::new(0.0),
        ),
    ));

    let mut upper = None;
    root.with_children(|body| {
        body.spawn((
            Collider::rectangle(def.body_width, lower_height),
            Transform::from_xyz(0.0, lower_offset, 0.0),
            body_layers,
        ));

        if let Some(crouch) = &def.crouch_collider {
            upper = Some(
                body.spawn((
                    UpperBody,
                    Collider::rectangle(crouch.width, crouch.height),
                    Transform::from_xyz(0.0, crouch.offset_y, 0.0),
                    body_layers,
                ))
                .id(),
            );
        }
    });

    if let Some(upper) = upper {
        root.insert(CrouchColliderLink(upper));
    }

    info!("Spawned player at ({}, {})", def.spawn_x, def.spawn_y);
}
