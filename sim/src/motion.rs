//! Per-tick motion stepping for celestial bodies.
//!
//! # Model
//! - Spin is a rotation of the body's own orientation about its local
//!   vertical axis.
//! - Revolution rotates the body's position vector about the parent's
//!   vertical axis. The position is expressed in the parent's local frame,
//!   so a parent's motion implicitly carries its children.
//! - Both are iterative: each tick composes one more small rotation onto
//!   the accumulated state. There is no orbital-phase variable and no
//!   wraparound; two runs with different step sizes trace the same circle
//!   at different phases.

use bevy_math::{Quat, Vec3};

/// Advances an orientation by one tick of self-rotation about the local
/// vertical axis. A zero angle (`speed * dt == 0`) is an exact no-op.
#[inline]
pub fn spin(rotation: Quat, speed: f32, dt: f32) -> Quat {
    rotation * Quat::from_rotation_y(speed * dt)
}

/// Advances a position by one tick of revolution, rotating the position
/// vector itself about the parent's vertical axis. A zero angle is an
/// exact no-op.
#[inline]
pub fn revolve(translation: Vec3, speed: f32, dt: f32) -> Vec3 {
    Quat::from_rotation_y(speed * dt) * translation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delta_leaves_position_and_orientation_untouched() {
        let translation = Vec3::new(14_089.0, 0.0, -233.5);
        let rotation = Quat::from_rotation_x(0.4);

        assert_eq!(revolve(translation, 0.01, 0.0), translation);
        assert_eq!(spin(rotation, 0.1, 0.0), rotation);
    }

    #[test]
    fn revolution_preserves_orbital_radius() {
        let mut p = Vec3::new(5270.0, 0.0, 0.0);
        let radius = p.length();
        for _ in 0..1000 {
            p = revolve(p, 0.01, 1.0 / 60.0);
        }
        assert!((p.length() - radius).abs() < radius * 1.0e-3);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn reverse_step_approximately_restores_position() {
        // The step is iterative rotation, not an exact involution; a
        // forward/backward pair lands back within floating-point drift.
        let start = Vec3::new(1234.5, 0.0, -678.9);
        let forward = revolve(start, 0.7, 0.25);
        let back = revolve(forward, 0.7, -0.25);
        assert!(back.distance(start) < 1.0e-2);
    }

    #[test]
    fn half_turn_negates_x_and_z() {
        // speed π with dt 1 is a 180° rotation about the vertical axis.
        let p = Vec3::new(1500.0, 0.0, -400.0);
        let rotated = revolve(p, std::f32::consts::PI, 1.0);
        assert!((rotated.x + p.x).abs() < 1.0);
        assert!((rotated.z + p.z).abs() < 1.0);
        assert_eq!(rotated.y, 0.0);
    }

    #[test]
    fn spin_rotates_about_the_local_axis_of_a_tilted_body() {
        // A body tilted about X keeps its tilt; spinning composes on the
        // body's own vertical, not the world's.
        let tilt = Quat::from_rotation_x(23.44f32.to_radians());
        let spun = spin(tilt, 0.1, 10.0);
        let local_up_before = tilt * Vec3::Y;
        let local_up_after = spun * Vec3::Y;
        assert!(local_up_before.distance(local_up_after) < 1.0e-5);
    }

    #[test]
    fn parent_spin_moves_child_world_position_but_not_local_offset() {
        let parent_translation = Vec3::new(14_089.0, 0.0, 0.0);
        let local_offset = Vec3::new(36.2, 0.0, 0.0);

        let before = Quat::IDENTITY;
        let after = spin(before, 0.1, 1.0);

        // Same composition the engine's transform propagation performs.
        let world_before = parent_translation + before * local_offset;
        let world_after = parent_translation + after * local_offset;

        assert!(world_before.distance(world_after) > 1.0);
        // The child's offset in the parent frame is untouched; only the
        // composed world position changed.
        assert_eq!(local_offset, Vec3::new(36.2, 0.0, 0.0));
    }

    #[test]
    fn parent_revolution_carries_child_world_position() {
        let parent = Vec3::new(14_089.0, 0.0, 0.0);
        let child_local = Vec3::new(36.2, 0.0, 0.0);

        let moved_parent = revolve(parent, 0.01, 1.0);
        let world_before = parent + child_local;
        let world_after = moved_parent + child_local;

        assert!(world_after.distance(world_before) > 1.0);
        assert!(
            (world_after.distance(moved_parent) - child_local.length()).abs() < 1.0e-3
        );
    }
}
