//! Movement domain: crouch resolution, velocity smoothing, facing, jumping.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::smoothing::smooth_damp_vec2;
use crate::movement::systems::collisions::ground_filter;
use crate::movement::{
    CheckPoints, CrouchChanged, CrouchColliderLink, Facing, MotionState, MovementInput,
    MovementTuning, Player,
};

/// A blocked ceiling keeps the character crouched no matter what the caller
/// asked for.
pub(crate) fn resolve_crouch(requested: bool, ceiling_blocked: bool) -> bool {
    requested || ceiling_blocked
}

/// Apply the latched movement intent once per fixed tick. Runs after
/// grounded recomputation.
pub(crate) fn apply_movement(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut input: ResMut<MovementInput>,
    spatial_query: SpatialQuery,
    mut crouch_messages: MessageWriter<CrouchChanged>,
    mut query: Query<
        (
            Entity,
            &CheckPoints,
            Option<&CrouchColliderLink>,
            &mut MotionState,
            &mut LinearVelocity,
            &ComputedMass,
            &mut Transform,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let intent = input.axis * dt;
    let jump = input.take_jump();

    for (entity, checks, crouch_link, mut state, mut velocity, mass, mut transform) in &mut query {
        let origin = transform.translation.truncate();

        // Crouch resolution: standing up requires headroom.
        let mut crouch = input.crouch_held;
        if !crouch {
            let blocked = !spatial_query
                .shape_intersections(
                    &Collider::circle(checks.ceiling_radius),
                    origin + checks.ceiling,
                    0.0,
                    &ground_filter(entity, crouch_link),
                )
                .is_empty();
            crouch = resolve_crouch(crouch, blocked);
        }

        // Horizontal control and collider toggling only apply on the ground
        // or with air control enabled.
        if state.grounded || tuning.air_control {
            if crouch {
                if let Some(crouching) = state.crouch_edge(true) {
                    crouch_messages.write(CrouchChanged { crouching });
                }
                if let Some(link) = crouch_link {
                    commands.entity(link.0).insert(ColliderDisabled);
                }
            } else {
                if let Some(link) = crouch_link {
                    commands.entity(link.0).remove::<ColliderDisabled>();
                }
                if let Some(crouching) = state.crouch_edge(false) {
                    crouch_messages.write(CrouchChanged { crouching });
                }
            }

            // Vertical velocity is the smoothing target's own y, so this
            // step steers x and leaves gravity alone.
            let target = Vec2::new(intent * 10.0, velocity.y);
            velocity.0 = smooth_damp_vec2(
                velocity.0,
                target,
                &mut state.smoothing_velocity,
                tuning.movement_smoothing,
                dt,
            );

            if let Some(facing) = state.facing_flip(intent) {
                state.facing = facing;
                transform.scale.x = -transform.scale.x;
            }
        }

        // Jumping bypasses the control gate.
        if state.consume_jump(jump) {
            velocity.y += tuning.jump_force / mass.value();
            debug!("Jump: impulse {} applied", tuning.jump_force);
        }
    }
}
