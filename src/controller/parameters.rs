//! Controller domain: movement parameters, override source, and construction settings.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// When a jump command is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum JumpPolicy {
    /// Anywhere, once the cooldown has run out.
    #[default]
    Anywhere,
    /// Only while grounded; the cooldown is ignored.
    GroundedOnly,
    Never,
}

/// Per-frame movement configuration. Swapped wholesale by physics volumes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct MovementParameters {
    /// Vertical acceleration in units/s². Negative pulls down.
    pub gravity: f32,
    /// Per-axis velocity ceiling.
    pub max_velocity: Vec2,
    /// Upward impulse added by a jump.
    pub jump_magnitude: f32,
    /// Seconds before another jump is allowed under `JumpPolicy::Anywhere`.
    pub jump_cooldown: f32,
    pub jump_policy: JumpPolicy,
}

impl Default for MovementParameters {
    fn default() -> Self {
        Self {
            gravity: -25.0,
            max_velocity: Vec2::new(8.0, 100.0),
            jump_magnitude: 12.0,
            jump_cooldown: 0.25,
            jump_policy: JumpPolicy::Anywhere,
        }
    }
}

/// Which parameter set currently drives the controller.
///
/// Last writer wins: entering a volume replaces whatever was active. Only the
/// volume that wrote the override can clear it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub enum ParameterSource {
    #[default]
    Default,
    Overridden {
        volume: Entity,
        parameters: MovementParameters,
    },
}

impl ParameterSource {
    pub fn resolve<'a>(&'a self, defaults: &'a MovementParameters) -> &'a MovementParameters {
        match self {
            ParameterSource::Default => defaults,
            ParameterSource::Overridden { parameters, .. } => parameters,
        }
    }

    /// The volume owning the active override.
    pub fn owner(&self) -> Option<Entity> {
        match self {
            ParameterSource::Default => None,
            ParameterSource::Overridden { volume, .. } => Some(*volume),
        }
    }

    pub fn is_overridden(&self) -> bool {
        matches!(self, ParameterSource::Overridden { .. })
    }
}

/// How the recomputed velocity is bounded by `max_velocity` after each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum VelocityClamp {
    /// `min(v, max)` per axis. Negative velocities are left unbounded.
    #[default]
    UpperOnly,
    /// `clamp(v, -max, max)` per axis.
    Symmetric,
}

impl VelocityClamp {
    pub fn apply(self, velocity: Vec2, max_velocity: Vec2) -> Vec2 {
        match self {
            VelocityClamp::UpperOnly => velocity.min(max_velocity),
            VelocityClamp::Symmetric => {
                let bound = max_velocity.abs();
                velocity.clamp(-bound, bound)
            }
        }
    }
}

/// Construction-time configuration for a character controller.
#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct ControllerSettings {
    /// Inward shrink applied to the collider before casting probe rays.
    pub skin_width: f32,
    /// Rays cast along the leading vertical edge when moving sideways.
    pub horizontal_rays: usize,
    /// Rays cast along the leading horizontal edge when moving vertically.
    pub vertical_rays: usize,
    /// Steepest walkable surface, measured from straight up.
    pub slope_limit_degrees: f32,
    pub velocity_clamp: VelocityClamp,
    pub default_parameters: MovementParameters,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            skin_width: 0.01,
            horizontal_rays: 8,
            vertical_rays: 4,
            slope_limit_degrees: 75.0,
            velocity_clamp: VelocityClamp::UpperOnly,
            default_parameters: MovementParameters::default(),
        }
    }
}

impl ControllerSettings {
    /// Check the settings against a collider of the given full size.
    pub fn validate(&self, collider_size: Vec2) -> Result<(), ControllerConfigError> {
        if self.skin_width <= 0.0 || !self.skin_width.is_finite() {
            return Err(ControllerConfigError::NonPositiveSkinWidth(self.skin_width));
        }
        if self.horizontal_rays < 2 {
            return Err(ControllerConfigError::TooFewRays {
                axis: RayAxis::Horizontal,
                count: self.horizontal_rays,
            });
        }
        if self.vertical_rays < 2 {
            return Err(ControllerConfigError::TooFewRays {
                axis: RayAxis::Vertical,
                count: self.vertical_rays,
            });
        }
        if !(0.0..=90.0).contains(&self.slope_limit_degrees) {
            return Err(ControllerConfigError::InvalidSlopeLimit(
                self.slope_limit_degrees,
            ));
        }
        let shrink = 2.0 * self.skin_width;
        if collider_size.x <= shrink || collider_size.y <= shrink {
            return Err(ControllerConfigError::ColliderTooSmall {
                size: collider_size,
                skin_width: self.skin_width,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayAxis {
    Horizontal,
    Vertical,
}

/// Reasons a controller cannot be built.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerConfigError {
    /// Only axis-aligned boxes are supported.
    NonCuboidCollider,
    NonPositiveSkinWidth(f32),
    TooFewRays { axis: RayAxis, count: usize },
    ColliderTooSmall { size: Vec2, skin_width: f32 },
    InvalidSlopeLimit(f32),
}

impl std::fmt::Display for ControllerConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerConfigError::NonCuboidCollider => {
                write!(f, "character collider must be a rectangle")
            }
            ControllerConfigError::NonPositiveSkinWidth(width) => {
                write!(f, "skin width must be positive, got {}", width)
            }
            ControllerConfigError::TooFewRays { axis, count } => {
                write!(f, "{:?} ray fan needs at least 2 rays, got {}", axis, count)
            }
            ControllerConfigError::ColliderTooSmall { size, skin_width } => write!(
                f,
                "collider {}x{} is too small for skin width {}",
                size.x, size.y, skin_width
            ),
            ControllerConfigError::InvalidSlopeLimit(degrees) => {
                write!(f, "slope limit must be within 0..=90 degrees, got {}", degrees)
            }
        }
    }
}

impl std::error::Error for ControllerConfigError {}
