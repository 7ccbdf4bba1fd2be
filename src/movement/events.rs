//! Movement domain: landing and crouch transition messages.

use bevy::ecs::message::Message;

/// Written once per false-to-true grounded transition, never on loss of
/// ground contact.
#[derive(Debug)]
pub struct Landed;

impl Message for Landed {}

/// Written once per crouch transition in either direction.
#[derive(Debug)]
pub struct CrouchChanged {
    pub crouching: bool,
}

impl Message for CrouchChanged {}
