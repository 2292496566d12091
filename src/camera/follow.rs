//! Camera domain: follow easing and bounds clamping.

use bevy::prelude::*;

/// Ease each axis toward `target` once it leaves that axis' margin.
pub fn follow_step(camera: Vec2, target: Vec2, margin: Vec2, smoothing: Vec2, dt: f32) -> Vec2 {
    let step = |from: f32, to: f32, margin: f32, smoothing: f32| {
        if (from - to).abs() > margin {
            from + (to - from) * (smoothing * dt).clamp(0.0, 1.0)
        } else {
            from
        }
    };

    Vec2::new(
        step(camera.x, target.x, margin.x, smoothing.x),
        step(camera.y, target.y, margin.y, smoothing.y),
    )
}

/// Keep a view of `half_view` extents inside `bounds`.
///
/// An axis where the view is larger than the bounds is centered instead.
pub fn clamp_to_bounds(position: Vec2, half_view: Vec2, bounds: Rect) -> Vec2 {
    let clamp = |value: f32, min: f32, max: f32, half: f32| {
        let (low, high) = (min + half, max - half);
        if low > high {
            (min + max) * 0.5
        } else {
            value.clamp(low, high)
        }
    };

    Vec2::new(
        clamp(position.x, bounds.min.x, bounds.max.x, half_view.x),
        clamp(position.y, bounds.min.y, bounds.max.y, half_view.y),
    )
}
