use crate::constants::{EARTH_RADIUS_KM, SCENE_UNITS_PER_EARTH_RADIUS};

/// Converts a real-world distance in kilometers to scene units.
///
/// Pure and total; `scale_kilometers(EARTH_RADIUS_KM)` is exactly
/// [`SCENE_UNITS_PER_EARTH_RADIUS`].
#[inline]
pub fn scale_kilometers(km: f32) -> f32 {
    km * SCENE_UNITS_PER_EARTH_RADIUS / EARTH_RADIUS_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_radius_maps_to_exactly_600_units() {
        assert_eq!(scale_kilometers(EARTH_RADIUS_KM), 600.0);
    }

    #[test]
    fn zero_maps_to_zero() {
        assert_eq!(scale_kilometers(0.0), 0.0);
    }

    #[test]
    fn scaling_matches_the_fixed_ratio() {
        // Spot-check a few real distances against km * 600 / 6371.
        for km in [1.0f32, 2439.7, 384_400.0, 57_900_000.0, 4_498_000_000.0] {
            let expected = km * 600.0 / 6371.0;
            assert_eq!(scale_kilometers(km), expected);
        }
    }

    #[test]
    fn scaling_is_linear() {
        let a = scale_kilometers(1000.0);
        let b = scale_kilometers(3000.0);
        assert!((b - 3.0 * a).abs() < 1.0e-3);
    }
}
