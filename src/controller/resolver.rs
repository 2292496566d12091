//! Controller domain: kinematic collision resolution.
//!
//! Turns a desired displacement into one that stops at the first obstruction
//! found by two fans of probe rays, horizontal first and then vertical from
//! the horizontally corrected position.

use avian2d::prelude::LayerMask;
use bevy::prelude::*;

use super::geometry::GeometryQuery;
use super::parameters::{ControllerConfigError, ControllerSettings};

/// Horizontal displacements at or below this are not probed sideways.
pub const HORIZONTAL_DEAD_ZONE: f32 = 0.001;
/// Tolerance added to the skin width when deciding a ray is already touching.
pub const CONTACT_EPSILON: f32 = 0.0001;

/// Contact flags gathered during one resolve.
///
/// Reset at the start of every resolve. A flag only ever goes from false to
/// true within that resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub struct ControllerState {
    pub colliding_above: bool,
    pub colliding_below: bool,
    pub colliding_left: bool,
    pub colliding_right: bool,
    pub moving_up_slope: bool,
}

impl ControllerState {
    pub fn is_grounded(&self) -> bool {
        self.colliding_below
    }

    pub fn is_colliding(&self) -> bool {
        self.colliding_above || self.colliding_below || self.colliding_left || self.colliding_right
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// World-space box the probe rays are cast from, already shrunk by the skin width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl ProbeBounds {
    pub fn from_center(center: Vec2, half_extents: Vec2, skin_width: f32) -> Self {
        let shrunk = half_extents - Vec2::splat(skin_width);
        Self {
            min: center - shrunk,
            max: center + shrunk,
        }
    }

    fn bottom_left(&self) -> Vec2 {
        self.min
    }

    fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.max.x, self.min.y)
    }

    fn top_left(&self) -> Vec2 {
        Vec2::new(self.min.x, self.max.y)
    }
}

/// Output of one resolve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub delta: Vec2,
    pub state: ControllerState,
    /// Nearest object under the box found by the downward fan, if any.
    pub standing_on: Option<Entity>,
}

/// Ray-fan collision resolver for one axis-aligned box.
#[derive(Debug, Clone)]
pub struct KinematicResolver {
    half_extents: Vec2,
    skin_width: f32,
    horizontal_rays: usize,
    vertical_rays: usize,
    /// Vertical gap between the rays of the horizontal fan.
    horizontal_ray_spacing: f32,
    /// Horizontal gap between the rays of the vertical fan.
    vertical_ray_spacing: f32,
    slope_limit_degrees: f32,
}

impl KinematicResolver {
    pub fn new(
        settings: &ControllerSettings,
        half_extents: Vec2,
    ) -> Result<Self, ControllerConfigError> {
        let size = half_extents * 2.0;
        settings.validate(size)?;

        let inner = size - Vec2::splat(2.0 * settings.skin_width);

        Ok(Self {
            half_extents,
            skin_width: settings.skin_width,
            horizontal_rays: settings.horizontal_rays,
            vertical_rays: settings.vertical_rays,
            horizontal_ray_spacing: inner.y / (settings.horizontal_rays - 1) as f32,
            vertical_ray_spacing: inner.x / (settings.vertical_rays - 1) as f32,
            slope_limit_degrees: settings.slope_limit_degrees,
        })
    }

    pub fn bounds_at(&self, center: Vec2) -> ProbeBounds {
        ProbeBounds::from_center(center, self.half_extents, self.skin_width)
    }

    /// Correct `desired` against the geometry around a box centred at `center`.
    pub fn resolve(
        &self,
        center: Vec2,
        desired: Vec2,
        was_grounded: bool,
        handle_collisions: bool,
        mask: LayerMask,
        geometry: &impl GeometryQuery,
    ) -> Resolution {
        let mut resolution = Resolution {
            delta: desired,
            state: ControllerState::default(),
            standing_on: None,
        };

        if !handle_collisions {
            return resolution;
        }

        let bounds = self.bounds_at(center);

        if resolution.delta.y < 0.0 && was_grounded {
            self.descend_slope(&mut resolution.delta);
        }

        if resolution.delta.x.abs() > HORIZONTAL_DEAD_ZONE {
            self.move_horizontally(&bounds, &mut resolution, mask, geometry);
        }

        self.move_vertically(&bounds, &mut resolution, mask, geometry);

        resolution
    }

    /// Keeps the box glued to downward slopes. Flat ground needs no correction.
    fn descend_slope(&self, _delta: &mut Vec2) {}

    /// Handles a walkable surface met by the lowest horizontal ray.
    ///
    /// Returns true when the hit is dealt with here and the fan should stop.
    /// Surfaces steeper than the slope limit are left to the wall clamp.
    fn climb_slope(&self, _delta: &mut Vec2, angle_degrees: f32) -> bool {
        angle_degrees <= self.slope_limit_degrees
    }

    fn move_horizontally(
        &self,
        bounds: &ProbeBounds,
        resolution: &mut Resolution,
        mask: LayerMask,
        geometry: &impl GeometryQuery,
    ) {
        let delta = &mut resolution.delta;
        let state = &mut resolution.state;

        let going_right = delta.x > 0.0;
        let direction = if going_right { Dir2::X } else { Dir2::NEG_X };
        let origin = if going_right {
            bounds.bottom_right()
        } else {
            bounds.bottom_left()
        };
        let mut ray_distance = delta.x.abs() + self.skin_width;

        for i in 0..self.horizontal_rays {
            let ray_origin = origin + Vec2::Y * (i as f32 * self.horizontal_ray_spacing);

            let Some(hit) = geometry.cast_ray(ray_origin, direction, ray_distance, mask) else {
                continue;
            };

            if i == 0 && self.climb_slope(delta, surface_angle(hit.normal)) {
                break;
            }

            delta.x = hit.point.x - ray_origin.x;
            ray_distance = delta.x.abs();

            if going_right {
                delta.x -= self.skin_width;
                state.colliding_right = true;
            } else {
                delta.x += self.skin_width;
                state.colliding_left = true;
            }

            if ray_distance < self.skin_width + CONTACT_EPSILON {
                break;
            }
        }
    }

    fn move_vertically(
        &self,
        bounds: &ProbeBounds,
        resolution: &mut Resolution,
        mask: LayerMask,
        geometry: &impl GeometryQuery,
    ) {
        let delta = &mut resolution.delta;
        let state = &mut resolution.state;

        let going_up = delta.y > 0.0;
        let direction = if going_up { Dir2::Y } else { Dir2::NEG_Y };
        let mut origin = if going_up {
            bounds.top_left()
        } else {
            bounds.bottom_left()
        };
        origin.x += delta.x;

        let mut ray_distance = delta.y.abs() + self.skin_width;
        let mut standing_on_distance = f32::MAX;

        for i in 0..self.vertical_rays {
            let ray_origin = origin + Vec2::X * (i as f32 * self.vertical_ray_spacing);

            let Some(hit) = geometry.cast_ray(ray_origin, direction, ray_distance, mask) else {
                continue;
            };

            if !going_up && hit.distance < standing_on_distance {
                standing_on_distance = hit.distance;
                resolution.standing_on = Some(hit.entity);
            }

            delta.y = hit.point.y - ray_origin.y;
            ray_distance = delta.y.abs();

            if going_up {
                delta.y -= self.skin_width;
                state.colliding_above = true;
            } else {
                delta.y += self.skin_width;
                state.colliding_below = true;
            }

            if !going_up && delta.y > CONTACT_EPSILON {
                state.moving_up_slope = true;
            }

            if ray_distance < self.skin_width + CONTACT_EPSILON {
                break;
            }
        }
    }
}

/// Unsigned angle in degrees between a surface normal and straight up.
pub fn surface_angle(normal: Vec2) -> f32 {
    normal
        .normalize_or_zero()
        .dot(Vec2::Y)
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees()
}
