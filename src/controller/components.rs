//! Controller domain: the character controller component and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::geometry::GeometryQuery;
use super::parameters::{
    ControllerConfigError, ControllerSettings, JumpPolicy, MovementParameters, ParameterSource,
    VelocityClamp,
};
use super::resolver::{ControllerState, KinematicResolver, Resolution};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Solid level geometry the controller collides with
    Platform,
    /// Player character
    Player,
    /// Triggers (physics volumes, checkpoints) - never block movement
    Sensor,
    /// Kills the player on contact
    Hazard,
}

/// Kinematic character controller.
///
/// Owns the character's velocity and contact state. Each [`tick`](Self::tick)
/// integrates gravity, resolves the resulting displacement against level
/// geometry and moves the transform by the corrected amount.
#[derive(Component, Debug, Clone)]
pub struct CharacterController2d {
    velocity: Vec2,
    state: ControllerState,
    standing_on: Option<Entity>,
    /// When false, movement passes through geometry unchecked.
    pub handle_collisions: bool,
    /// Layers treated as solid.
    pub platform_mask: LayerMask,
    default_parameters: MovementParameters,
    parameter_source: ParameterSource,
    velocity_clamp: VelocityClamp,
    jump_cooldown_timer: f32,
    resolver: KinematicResolver,
}

impl CharacterController2d {
    /// Build a controller for a box collider with the given half extents.
    pub fn new(
        settings: &ControllerSettings,
        half_extents: Vec2,
    ) -> Result<Self, ControllerConfigError> {
        let resolver = KinematicResolver::new(settings, half_extents)?;

        Ok(Self {
            velocity: Vec2::ZERO,
            state: ControllerState::default(),
            standing_on: None,
            handle_collisions: true,
            platform_mask: GameLayer::Platform.into(),
            default_parameters: settings.default_parameters,
            parameter_source: ParameterSource::Default,
            velocity_clamp: settings.velocity_clamp,
            jump_cooldown_timer: 0.0,
            resolver,
        })
    }

    /// Build a controller sized from an avian rectangle collider.
    pub fn from_collider(
        settings: &ControllerSettings,
        collider: &Collider,
    ) -> Result<Self, ControllerConfigError> {
        Self::new(settings, collider_half_extents(collider)?)
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn standing_on(&self) -> Option<Entity> {
        self.standing_on
    }

    pub fn jump_cooldown_remaining(&self) -> f32 {
        self.jump_cooldown_timer
    }

    /// The parameters in effect: the active override, or the defaults.
    pub fn parameters(&self) -> &MovementParameters {
        self.parameter_source.resolve(&self.default_parameters)
    }

    pub fn parameter_source(&self) -> &ParameterSource {
        &self.parameter_source
    }

    /// Make `volume` the owner of the active parameters.
    pub fn set_override(&mut self, volume: Entity, parameters: MovementParameters) {
        self.parameter_source = ParameterSource::Overridden { volume, parameters };
    }

    /// Return to the defaults if `volume` owns the override. Returns whether it did.
    pub fn clear_override(&mut self, volume: Entity) -> bool {
        if self.parameter_source.owner() != Some(volume) {
            return false;
        }
        self.parameter_source = ParameterSource::Default;
        true
    }

    pub fn add_force(&mut self, force: Vec2) {
        self.velocity += force;
    }

    pub fn set_force(&mut self, force: Vec2) {
        self.velocity = force;
    }

    pub fn set_horizontal_force(&mut self, x: f32) {
        self.velocity.x = x;
    }

    pub fn set_vertical_force(&mut self, y: f32) {
        self.velocity.y = y;
    }

    pub fn can_jump(&self) -> bool {
        match self.parameters().jump_policy {
            JumpPolicy::Anywhere => self.jump_cooldown_timer <= 0.0,
            JumpPolicy::GroundedOnly => self.state.is_grounded(),
            JumpPolicy::Never => false,
        }
    }

    /// Apply the jump impulse if the jump policy allows it. Returns whether it did.
    pub fn jump(&mut self) -> bool {
        if !self.can_jump() {
            return false;
        }

        let parameters = *self.parameters();
        self.add_force(Vec2::new(0.0, parameters.jump_magnitude));
        self.jump_cooldown_timer = parameters.jump_cooldown;
        true
    }

    /// Advance one frame: integrate gravity, resolve, and move `transform`.
    ///
    /// Returns the resolution that was applied.
    pub fn tick(
        &mut self,
        transform: &mut Transform,
        dt: f32,
        geometry: &impl GeometryQuery,
    ) -> Resolution {
        let parameters = *self.parameters();

        self.jump_cooldown_timer -= dt;
        self.velocity.y += parameters.gravity * dt;

        let was_grounded = self.state.is_grounded();
        let resolution = self.resolver.resolve(
            transform.translation.truncate(),
            self.velocity * dt,
            was_grounded,
            self.handle_collisions,
            self.platform_mask,
            geometry,
        );

        self.state = resolution.state;
        self.standing_on = resolution.standing_on;

        transform.translation += resolution.delta.extend(0.0);

        if dt > 0.0 {
            self.velocity = resolution.delta / dt;
        }

        self.velocity = self
            .velocity_clamp
            .apply(self.velocity, parameters.max_velocity);

        if self.state.moving_up_slope {
            self.velocity.y = 0.0;
        }

        resolution
    }
}

/// Half extents of a rectangle collider, scale included.
pub fn collider_half_extents(collider: &Collider) -> Result<Vec2, ControllerConfigError> {
    match collider.shape_scaled().as_cuboid() {
        Some(cuboid) => Ok(Vec2::new(cuboid.half_extents.x, cuboid.half_extents.y)),
        None => Err(ControllerConfigError::NonCuboidCollider),
    }
}

/// Sensor region that replaces a controller's movement parameters while it is inside.
#[derive(Component, Debug, Clone, Reflect)]
pub struct PhysicsVolume {
    pub parameters: MovementParameters,
}
