//! Random placement in the orbital plane.
//!
//! All revolution motion happens in the XZ plane (Y held at 0), so
//! procedural placement samples there too. Both functions are pure in
//! their inputs plus the supplied random source; passing a seeded RNG
//! makes them deterministic.

use bevy_math::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Returns a point at exactly `magnitude` from the origin, at an angle
/// drawn uniformly from `[0, 2π)`. The Y component is always 0.
pub fn random_point_on_circle<R: Rng>(rng: &mut R, magnitude: f32) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    Vec3::new(theta.cos() * magnitude, 0.0, theta.sin() * magnitude)
}

/// Returns a point whose distance from the origin is drawn uniformly from
/// `[min_magnitude, max_magnitude]`, at a uniformly random angle.
///
/// Uniform-in-magnitude sampling concentrates areal density toward the
/// inner radius. Callers depend on this exact distribution; do not switch
/// to area-uniform sampling.
pub fn random_point_in_annulus<R: Rng>(
    rng: &mut R,
    min_magnitude: f32,
    max_magnitude: f32,
) -> Vec3 {
    let magnitude = rng.gen_range(min_magnitude..=max_magnitude);
    random_point_on_circle(rng, magnitude)
}
