//! Movement domain: ground detection via circle overlap.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{CheckPoints, CrouchColliderLink, GameLayer, Landed, MotionState, Player};

/// Ground-layer filter that skips the character's own shapes.
pub(crate) fn ground_filter(
    entity: Entity,
    crouch_link: Option<&CrouchColliderLink>,
) -> SpatialQueryFilter {
    let mut excluded = vec![entity];
    if let Some(link) = crouch_link {
        excluded.push(link.0);
    }
    SpatialQueryFilter::from_mask(GameLayer::Ground).with_excluded_entities(excluded)
}

/// Recompute groundedness once per fixed tick, before movement is applied.
pub(crate) fn refresh_grounded(
    spatial_query: SpatialQuery,
    mut landed_messages: MessageWriter<Landed>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &CheckPoints,
            Option<&CrouchColliderLink>,
            &mut MotionState,
        ),
        With<Player>,
    >,
) {
    for (entity, transform, checks, crouch_link, mut state) in &mut query {
        let origin = transform.translation.truncate() + checks.ground;
        let hits = spatial_query.shape_intersections(
            &Collider::circle(checks.ground_radius),
            origin,
            0.0,
            &ground_filter(entity, crouch_link),
        );

        if state.apply_ground_scan(!hits.is_empty()) {
            landed_messages.write(Landed);
            debug!("Landed: {} ground overlap(s)", hits.len());
        }
    }
}
