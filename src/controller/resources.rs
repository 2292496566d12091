//! Controller domain: debug resources.

use bevy::prelude::*;

use super::geometry::ProbeRay;

/// Probe rays cast during the last controller tick.
#[derive(Resource, Debug)]
pub struct ProbeTraces {
    /// When false, ticks cast rays without recording them.
    pub enabled: bool,
    pub rays: Vec<ProbeRay>,
}

impl Default for ProbeTraces {
    fn default() -> Self {
        Self {
            enabled: cfg!(feature = "dev-tools"),
            rays: Vec::new(),
        }
    }
}
