//! Movement domain: debug-only test cavern.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

/// Static room with platforms and a tunnel low enough that walking through
/// it requires crouching.
pub(crate) fn spawn_test_cavern(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // Ground
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(1200.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -220.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1200.0, 40.0),
        ground_layers,
    ));

    // Boundary walls, on the ground layer like everything solid
    for x in [-620.0, 620.0] {
        commands.spawn((
            Ground,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(40.0, 560.0)),
                ..default()
            },
            Transform::from_xyz(x, 40.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 560.0),
            ground_layers,
        ));
    }

    // Tunnel roof over the ground on the right side; the gap underneath
    // fits a crouched body but not a standing one.
    commands.spawn((
        Ground,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(260.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(320.0, -160.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(260.0, 20.0),
        ground_layers,
    ));

    // Platform 1 - left side
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(150.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(-250.0, -80.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(150.0, 20.0),
        ground_layers,
    ));

    // Platform 2 - center, higher
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(120.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(-40.0, 20.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(120.0, 20.0),
        ground_layers,
    ));
}
