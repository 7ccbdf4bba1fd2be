//! Animation state machine and playback.
//!
//! Maps motion state and the per-frame running flag to animation states and
//! advances frame progression.

use bevy::prelude::*;

use crate::movement::{MotionState, MovementInput, Player};

/// Animation states for the player character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Crouch,
}

/// Component for animation playback.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation should loop.
    pub looping: bool,
    /// Standing body height, restored when a crouch ends.
    pub base_height: f32,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            looping: true,
            base_height: 48.0,
        }
    }
}

impl AnimationController {
    /// Set the animation state, resetting playback if it changed.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state == state {
            return;
        }
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;

        self.looping = matches!(state, AnimationState::Idle | AnimationState::Run);

        self.total_frames = match state {
            AnimationState::Idle => 4,
            AnimationState::Run => 6,
            AnimationState::Jump => 2,
            AnimationState::Crouch => 2,
        };

        self.frame_duration = match state {
            AnimationState::Run => 0.1,
            _ => 0.15,
        };
    }
}

/// The animation state implied by motion state and the running flag.
/// Airborne wins over crouch, crouch over run.
pub(crate) fn target_state(grounded: bool, crouching: bool, running: bool) -> AnimationState {
    if !grounded {
        AnimationState::Jump
    } else if crouching {
        AnimationState::Crouch
    } else if running {
        AnimationState::Run
    } else {
        AnimationState::Idle
    }
}

pub(crate) fn drive_player_animation(
    input: Res<MovementInput>,
    mut query: Query<(&MotionState, &mut AnimationController), With<Player>>,
) {
    for (state, mut controller) in &mut query {
        controller.set_state(target_state(
            state.grounded,
            state.was_crouching,
            input.running,
        ));
    }
}

/// Advance animation frames based on time.
pub(crate) fn advance_animation_frames(
    time: Res<Time>,
    mut query: Query<&mut AnimationController>,
) {
    for mut controller in &mut query {
        controller.frame_timer += time.delta_secs();

        if controller.frame_timer >= controller.frame_duration {
            controller.frame_timer -= controller.frame_duration;

            if controller.current_frame + 1 < controller.total_frames {
                controller.current_frame += 1;
            } else if controller.looping {
                controller.current_frame = 0;
            }
        }
    }
}

/// Placeholder look until sprite sheets land: states tint the body quad and
/// crouching squashes it to the crouched silhouette.
pub(crate) fn apply_player_look(
    mut query: Query<(&AnimationController, &mut Sprite), With<Player>>,
) {
    for (controller, mut sprite) in &mut query {
        let width = sprite.custom_size.map(|s| s.x).unwrap_or(24.0);

        let (color, height) = match controller.state {
            AnimationState::Idle => (Color::srgb(0.9, 0.9, 0.9), controller.base_height),
            AnimationState::Run => {
                let tint = if controller.current_frame % 2 == 0 {
                    Color::srgb(0.95, 0.95, 0.85)
                } else {
                    Color::srgb(0.85, 0.85, 0.95)
                };
                (tint, controller.base_height)
            }
            AnimationState::Jump => (Color::srgb(0.8, 0.9, 1.0), controller.base_height),
            AnimationState::Crouch => (Color::srgb(0.9, 0.8, 0.7), controller.base_height / 2.0),
        };

        sprite.color = color;
        sprite.custom_size = Some(Vec2::new(width, height));
    }
}
