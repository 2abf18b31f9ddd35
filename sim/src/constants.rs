/// Earth's mean radius in kilometers, the reference for scene scaling.
pub const EARTH_RADIUS_KM: f32 = 6371.0;

/// Scene units corresponding to one Earth radius.
///
/// Together with [`EARTH_RADIUS_KM`] this fixes the global kilometers-to-
/// scene-units ratio used by `scale::scale_kilometers()`:
/// `units = km * 600 / 6371`, so Earth's radius maps to exactly 600 units.
pub const SCENE_UNITS_PER_EARTH_RADIUS: f32 = 600.0;

/// Display factor applied to planet/moon/ring radii.
///
/// At true scale the planets are invisible specks next to their orbital
/// distances; radii are inflated by this factor after unit conversion.
/// The sun is drawn without it.
pub const BODY_RADIUS_DISPLAY_FACTOR: f32 = 20.0;

/// Display factor applied to orbital distances to compress the system
/// into a navigable volume.
pub const ORBIT_DISTANCE_DISPLAY_FACTOR: f32 = 0.1;
