//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::refresh_grounded;
pub(crate) use input::read_input;
pub(crate) use movement::apply_movement;
