pub mod constants;
pub mod motion;
pub mod placement;
pub mod scale;

pub use constants::{
    BODY_RADIUS_DISPLAY_FACTOR, EARTH_RADIUS_KM, ORBIT_DISTANCE_DISPLAY_FACTOR,
    SCENE_UNITS_PER_EARTH_RADIUS,
};
pub use motion::{revolve, spin};
pub use placement::{random_point_in_annulus, random_point_on_circle};
pub use scale::scale_kilometers;
