//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, tunnel roofs)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-character motion state, recomputed and consumed on the fixed tick.
#[derive(Component, Debug, Default)]
pub struct MotionState {
    /// True iff the last ground scan found a qualifying overlap.
    pub grounded: bool,
    pub facing: Facing,
    /// Crouch transition memory; flips only when crouch intent changes.
    pub was_crouching: bool,
    /// Persistent derivative state of the velocity smoothing filter.
    pub smoothing_velocity: Vec2,
}

impl MotionState {
    /// Fold one ground-scan result in. The was-grounded snapshot is taken
    /// once here, so any number of overlapping shapes yields one landing.
    /// Returns true when this tick is a landing (false-to-true transition).
    pub(crate) fn apply_ground_scan(&mut self, any_hit: bool) -> bool {
        let was_grounded = self.grounded;
        self.grounded = any_hit;
        any_hit && !was_grounded
    }

    /// Advance the crouch state machine. Returns the new crouch state when
    /// it changed, `None` on repeated same-state ticks.
    pub(crate) fn crouch_edge(&mut self, crouching: bool) -> Option<bool> {
        if crouching == self.was_crouching {
            return None;
        }
        self.was_crouching = crouching;
        Some(crouching)
    }

    /// The facing the character should turn to for this intent, or `None`
    /// when intent is zero or already agrees with the current facing.
    pub(crate) fn facing_flip(&self, intent: f32) -> Option<Facing> {
        match self.facing {
            Facing::Left if intent > 0.0 => Some(Facing::Right),
            Facing::Right if intent < 0.0 => Some(Facing::Left),
            _ => None,
        }
    }

    /// Consume a jump request. Grounded is cleared immediately on success so
    /// a second request cannot fire before the next ground scan.
    pub(crate) fn consume_jump(&mut self, requested: bool) -> bool {
        if self.grounded && requested {
            self.grounded = false;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// World-space overlap-check anchors, as offsets from the character origin.
#[derive(Component, Debug)]
pub struct CheckPoints {
    pub ground: Vec2,
    pub ceiling: Vec2,
    pub ground_radius: f32,
    pub ceiling_radius: f32,
}

/// Collider entity switched off while the character is crouched.
#[derive(Component, Debug)]
pub struct CrouchColliderLink(pub Entity);

/// Marker for the upper-body collider on the player hierarchy.
#[derive(Component, Debug)]
pub struct UpperBody;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;
