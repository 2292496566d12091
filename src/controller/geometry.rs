//! Controller domain: ray queries against level geometry.
//!
//! The resolver never intersects shapes itself. It asks a [`GeometryQuery`]
//! for the nearest hit along each probe ray, so it can run against avian's
//! spatial query pipeline in the game and against plain shapes in tests.

use std::cell::RefCell;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Nearest intersection along a probe ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// World-space hit point.
    pub point: Vec2,
    /// Surface normal at the hit point.
    pub normal: Vec2,
    /// Distance from the ray origin to `point`.
    pub distance: f32,
    /// The collider that was hit.
    pub entity: Entity,
}

pub trait GeometryQuery {
    /// Cast a ray and return the nearest hit on a layer included in `mask`.
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;
}

impl<G: GeometryQuery + ?Sized> GeometryQuery for &G {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        (**self).cast_ray(origin, direction, max_distance, mask)
    }
}

/// [`GeometryQuery`] backed by avian's spatial query pipeline.
pub struct AvianGeometry<'q, 'w, 's> {
    spatial_query: &'q SpatialQuery<'w, 's>,
    /// The character's own collider, which every probe starts inside.
    exclude: Entity,
}

impl<'q, 'w, 's> AvianGeometry<'q, 'w, 's> {
    pub fn new(spatial_query: &'q SpatialQuery<'w, 's>, exclude: Entity) -> Self {
        Self {
            spatial_query,
            exclude,
        }
    }
}

impl GeometryQuery for AvianGeometry<'_, '_, '_> {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        let filter = SpatialQueryFilter::from_mask(mask).with_excluded_entities([self.exclude]);

        self.spatial_query
            .cast_ray(origin, direction, max_distance, true, &filter)
            .map(|hit| RayHit {
                point: origin + *direction * hit.distance,
                normal: hit.normal,
                distance: hit.distance,
                entity: hit.entity,
            })
    }
}

/// A probe ray as it was cast, for debug drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeRay {
    pub origin: Vec2,
    pub end: Vec2,
    pub hit: bool,
}

/// Wraps another query and records every ray it is asked to cast.
pub struct TracingGeometry<'r, G> {
    inner: G,
    rays: RefCell<&'r mut Vec<ProbeRay>>,
}

impl<'r, G: GeometryQuery> TracingGeometry<'r, G> {
    pub fn new(inner: G, rays: &'r mut Vec<ProbeRay>) -> Self {
        Self {
            inner,
            rays: RefCell::new(rays),
        }
    }
}

impl<G: GeometryQuery> GeometryQuery for TracingGeometry<'_, G> {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        let hit = self.inner.cast_ray(origin, direction, max_distance, mask);
        self.rays.borrow_mut().push(ProbeRay {
            origin,
            end: origin + *direction * max_distance,
            hit: hit.is_some(),
        });
        hit
    }
}
