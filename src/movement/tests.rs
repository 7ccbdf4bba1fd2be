//! Movement domain: tests for grounded, crouch, jump, facing, smoothing,
//! and input latch logic.

use bevy::prelude::*;

use super::smoothing::{smooth_damp, smooth_damp_vec2};
use super::systems::movement::resolve_crouch;
use super::{Facing, MotionState, MovementInput, MovementTuning};

const FIXED_DT: f32 = 1.0 / 64.0;

// -----------------------------------------------------------------------------
// Grounded scan tests
// -----------------------------------------------------------------------------

#[test]
fn test_ground_scan_miss_clears_grounded_without_landing() {
    let mut state = MotionState {
        grounded: true,
        ..default()
    };

    assert!(!state.apply_ground_scan(false));
    assert!(!state.grounded);
}

#[test]
fn test_ground_scan_landing_fires_exactly_once() {
    let mut state = MotionState::default();

    assert!(state.apply_ground_scan(true));
    assert!(state.grounded);

    // Staying grounded is not a landing.
    assert!(!state.apply_ground_scan(true));
    assert!(!state.apply_ground_scan(true));
}

#[test]
fn test_ground_scan_loss_of_contact_never_notifies() {
    let mut state = MotionState::default();
    state.apply_ground_scan(true);

    assert!(!state.apply_ground_scan(false));
    assert!(!state.apply_ground_scan(false));
}

// -----------------------------------------------------------------------------
// Crouch tests
// -----------------------------------------------------------------------------

#[test]
fn test_crouch_edge_fires_once_per_transition() {
    let mut state = MotionState::default();

    assert_eq!(state.crouch_edge(true), Some(true));
    assert_eq!(state.crouch_edge(true), None);
    assert_eq!(state.crouch_edge(false), Some(false));
    assert_eq!(state.crouch_edge(false), None);
}

#[test]
fn test_blocked_ceiling_behaves_like_requested_crouch() {
    // With a blocked ceiling the tick is indistinguishable from an actual
    // crouch request.
    assert!(resolve_crouch(false, true));
    assert_eq!(resolve_crouch(false, true), resolve_crouch(true, true));
    assert_eq!(resolve_crouch(false, true), resolve_crouch(true, false));
    assert!(!resolve_crouch(false, false));
}

#[test]
fn test_forced_crouch_drives_the_same_state_machine() {
    let mut requested = MotionState::default();
    let mut forced = MotionState::default();

    let fired_requested = requested.crouch_edge(resolve_crouch(true, false));
    let fired_forced = forced.crouch_edge(resolve_crouch(false, true));

    assert_eq!(fired_requested, fired_forced);
    assert_eq!(requested.was_crouching, forced.was_crouching);
}

// -----------------------------------------------------------------------------
// Jump tests
// -----------------------------------------------------------------------------

#[test]
fn test_jump_requires_ground_contact() {
    let mut state = MotionState::default();
    assert!(!state.consume_jump(true));

    state.grounded = true;
    assert!(!state.consume_jump(false));
    assert!(state.grounded);
}

#[test]
fn test_jump_clears_grounded_immediately() {
    let mut state = MotionState {
        grounded: true,
        ..default()
    };

    assert!(state.consume_jump(true));
    assert!(!state.grounded);

    // No second jump before the next ground scan.
    assert!(!state.consume_jump(true));
}

// -----------------------------------------------------------------------------
// Facing tests
// -----------------------------------------------------------------------------

#[test]
fn test_facing_flips_only_on_sign_disagreement() {
    let right = MotionState::default();
    assert_eq!(right.facing_flip(1.0), None);
    assert_eq!(right.facing_flip(0.0), None);
    assert_eq!(right.facing_flip(-1.0), Some(Facing::Left));

    let left = MotionState {
        facing: Facing::Left,
        ..default()
    };
    assert_eq!(left.facing_flip(-1.0), None);
    assert_eq!(left.facing_flip(0.0), None);
    assert_eq!(left.facing_flip(1.0), Some(Facing::Right));
}

// -----------------------------------------------------------------------------
// Smoothing tests
// -----------------------------------------------------------------------------

#[test]
fn test_smooth_damp_converges_monotonically() {
    let mut velocity = 0.0;
    let mut current = 0.0;
    let mut previous = 0.0;

    for _ in 0..256 {
        current = smooth_damp(current, 5.0, &mut velocity, 0.05, FIXED_DT);
        assert!(current + 1e-4 >= previous);
        assert!(current <= 5.0 + 1e-3);
        previous = current;
    }

    assert!((current - 5.0).abs() < 1e-2);
}

#[test]
fn test_smooth_damp_bounded_at_max_smoothing() {
    let mut velocity = 0.0;
    let mut current = 0.0;

    for _ in 0..512 {
        current = smooth_damp(current, 5.0, &mut velocity, 0.3, FIXED_DT);
        assert!(current <= 5.0 + 1e-3);
    }

    assert!((current - 5.0).abs() < 0.05);
}

#[test]
fn test_smooth_damp_holds_matching_vertical_target() {
    // The vertical target tracks the current velocity, so with no
    // accumulated derivative state the y component is untouched.
    let mut state = Vec2::ZERO;
    let out = smooth_damp_vec2(
        Vec2::new(0.0, -3.0),
        Vec2::new(1.0, -3.0),
        &mut state,
        0.05,
        FIXED_DT,
    );

    assert_eq!(out.y, -3.0);
    assert!(out.x > 0.0);
}

// -----------------------------------------------------------------------------
// Tick scenario tests
// -----------------------------------------------------------------------------

#[test]
fn test_walk_intent_trends_toward_ten_times_intent() {
    let mut state = MotionState {
        grounded: true,
        facing: Facing::Left,
        ..default()
    };
    let mut velocity = Vec2::ZERO;

    for _ in 0..256 {
        let target = Vec2::new(0.5 * 10.0, velocity.y);
        velocity = smooth_damp_vec2(
            velocity,
            target,
            &mut state.smoothing_velocity,
            0.05,
            FIXED_DT,
        );
    }
    assert!((velocity.x - 5.0).abs() < 1e-2);

    if let Some(facing) = state.facing_flip(0.5) {
        state.facing = facing;
    }
    assert_eq!(state.facing, Facing::Right);
}

#[test]
fn test_grounded_jump_applies_impulse_and_clears_ground() {
    let tuning = MovementTuning::default();
    let mut state = MotionState {
        grounded: true,
        ..default()
    };
    let mut velocity = Vec2::new(2.0, 0.0);

    // Zero horizontal intent keeps smoothing toward zero.
    let target = Vec2::new(0.0, velocity.y);
    velocity = smooth_damp_vec2(
        velocity,
        target,
        &mut state.smoothing_velocity,
        tuning.movement_smoothing,
        FIXED_DT,
    );
    assert!(velocity.x < 2.0);

    assert!(state.consume_jump(true));
    let mass = 1.0;
    velocity.y += tuning.jump_force / mass;

    assert!(!state.grounded);
    assert_eq!(velocity.y, tuning.jump_force);
}

// -----------------------------------------------------------------------------
// Input latch tests
// -----------------------------------------------------------------------------

#[test]
fn test_jump_latch_consumed_exactly_once() {
    let mut input = MovementInput::default();
    input.latch_jump();

    // More frame ticks pass without a physics tick; the latch holds.
    input.latch_jump();

    assert!(input.take_jump());
    assert!(!input.take_jump());
}

#[test]
fn test_jump_latch_starts_clear() {
    let mut input = MovementInput::default();
    assert!(!input.take_jump());
}

// -----------------------------------------------------------------------------
// Tuning tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_smoothing_within_valid_range() {
    let tuning = MovementTuning::default();
    assert!((0.0..=0.3).contains(&tuning.movement_smoothing));
}
