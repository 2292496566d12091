//! Kinematic 2D platformer character controller built on bevy and avian2d.
//!
//! [`controller`] holds the ray-probe collision resolver and the
//! [`CharacterController2d`](controller::CharacterController2d) facade. The
//! remaining domains wire it into a small playable level.

pub mod camera;
pub mod controller;
pub mod level;
pub mod player;
pub mod settings;
