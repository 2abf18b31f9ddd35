//! Scene assembly: the eight planets, Earth's moon and Saturn's ring
//! system, built from real astronomical values run through the scene
//! scale and display factors.

use crate::celestial::{self, BodyParams, RingParams};
use bevy::prelude::*;
use sim::{BODY_RADIUS_DISPLAY_FACTOR, ORBIT_DISTANCE_DISPLAY_FACTOR, scale_kilometers};

/// Low white fill so night sides stay faintly visible.
const AMBIENT_BRIGHTNESS: f32 = 25.0;

const MOON_RADIUS_KM: f32 = 1737.0;
/// Earth-moon distance; small enough that it skips the orbit compression
/// factor applied to planetary distances.
const MOON_ORBIT_KM: f32 = 384_400.0;

const SATURN_RING_INNER_KM: f32 = 147_000.0;
const SATURN_RING_WIDTH_KM: f32 = 57_600.0;

struct Planet {
    name: &'static str,
    texture: &'static str,
    radius_km: f32,
    orbit_km: f32,
    axial_tilt_degrees: f32,
    spin_speed: f32,
    orbit_speed: f32,
}

const PLANETS: [Planet; 8] = [
    Planet {
        name: "Mercury",
        texture: "planets/mercury.jpeg",
        radius_km: 2439.7,
        orbit_km: 57_900_000.0,
        axial_tilt_degrees: 0.027,
        spin_speed: 0.01,
        orbit_speed: 0.01,
    },
    Planet {
        name: "Venus",
        texture: "planets/venus.jpeg",
        radius_km: 6051.8,
        orbit_km: 108_200_000.0,
        axial_tilt_degrees: 177.3,
        spin_speed: 0.1,
        orbit_speed: 0.01,
    },
    Planet {
        name: "Earth",
        texture: "planets/earth.jpeg",
        radius_km: 6371.0,
        orbit_km: 149_600_000.0,
        axial_tilt_degrees: 23.44,
        spin_speed: 0.1,
        orbit_speed: 0.01,
    },
    Planet {
        name: "Mars",
        texture: "planets/mars.jpeg",
        radius_km: 3389.5,
        orbit_km: 227_900_000.0,
        axial_tilt_degrees: 25.19,
        spin_speed: 0.1,
        orbit_speed: 0.01,
    },
    Planet {
        name: "Jupiter",
        texture: "planets/jupiter.jpeg",
        radius_km: 58_232.0,
        orbit_km: 778_300_000.0,
        axial_tilt_degrees: 3.0,
        spin_speed: 0.1,
        orbit_speed: 0.01,
    },
    Planet {
        name: "Saturn",
        texture: "planets/saturn.jpeg",
        radius_km: 69_911.0,
        orbit_km: 1_427_000_000.0,
        axial_tilt_degrees: 26.74,
        spin_speed: 0.1,
        orbit_speed: 0.01,
    },
    Planet {
        name: "Uranus",
        texture: "planets/uranus.jpeg",
        radius_km: 25_362.0,
        orbit_km: 2_871_000_000.0,
        axial_tilt_degrees: 97.7,
        spin_speed: 0.1,
        orbit_speed: 0.01,
    },
    Planet {
        name: "Neptune",
        texture: "planets/neptune.jpeg",
        radius_km: 24_622.0,
        orbit_km: 4_498_000_000.0,
        axial_tilt_degrees: 28.0,
        spin_speed: 0.1,
        orbit_speed: 0.01,
    },
];

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
    app.add_systems(Startup, spawn_bodies);
}

fn spawn_bodies(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for body in &PLANETS {
        let translation = Vec3::new(
            scale_kilometers(body.orbit_km) * ORBIT_DISTANCE_DISPLAY_FACTOR,
            0.0,
            0.0,
        );
        let entity = celestial::spawn_body(
            &mut commands,
            &mut meshes,
            &mut materials,
            &asset_server,
            BodyParams {
                name: body.name,
                radius: scale_kilometers(body.radius_km) * BODY_RADIUS_DISPLAY_FACTOR,
                texture: body.texture,
                axial_tilt_degrees: body.axial_tilt_degrees,
                spin_speed: body.spin_speed,
                orbit_speed: body.orbit_speed,
                translation,
                parent: None,
                orbit_path: true,
            },
        );

        match body.name {
            // The moon rides in Earth's local frame: revolution applies
            // there, and Earth's own motion carries it along.
            "Earth" => {
                celestial::spawn_body(
                    &mut commands,
                    &mut meshes,
                    &mut materials,
                    &asset_server,
                    BodyParams {
                        name: "Moon",
                        radius: scale_kilometers(MOON_RADIUS_KM) * BODY_RADIUS_DISPLAY_FACTOR,
                        texture: "moons/moon.jpeg",
                        axial_tilt_degrees: 0.0,
                        spin_speed: 0.1,
                        orbit_speed: 0.7,
                        translation: Vec3::new(scale_kilometers(MOON_ORBIT_KM), 0.0, 0.0),
                        parent: Some(entity),
                        orbit_path: false,
                    },
                );
            }
            // The ring system starts at Saturn's position and revolves at
            // Saturn's orbital speed, which keeps the two aligned.
            "Saturn" => {
                celestial::spawn_ring(
                    &mut commands,
                    &mut meshes,
                    &mut materials,
                    &asset_server,
                    RingParams {
                        name: "Saturn rings",
                        inner_radius: scale_kilometers(SATURN_RING_INNER_KM)
                            * BODY_RADIUS_DISPLAY_FACTOR,
                        width: scale_kilometers(SATURN_RING_WIDTH_KM) * BODY_RADIUS_DISPLAY_FACTOR,
                        texture: "moons/saturn_rings.png",
                        axial_tilt_degrees: body.axial_tilt_degrees,
                        orbit_speed: body.orbit_speed,
                        translation,
                    },
                );
            }
            _ => {}
        }
    }

    info!("solar system assembled: {} planets", PLANETS.len());
}
