//! Celestial bodies and their per-tick motion.
//!
//! # Model
//! - A body's `Transform` holds its position in the parent's local frame
//!   and its orientation, pre-rotated at spawn by the axial tilt.
//! - Spin rotates the orientation about the body's local vertical axis.
//! - Revolution rotates the position vector about the parent's vertical
//!   axis. It is iterative rotation of the stored vector, not an orbital
//!   phase angle.
//! - Moons are child entities, so the engine's transform propagation
//!   carries them with their parent while their own revolution runs in
//!   the parent's local frame.

use bevy::{light::NotShadowCaster, prelude::*};
use sim::motion;
use std::f32::consts::FRAC_PI_2;

/// Tube radius of the white orbit-path torus.
const ORBIT_PATH_THICKNESS: f32 = 250.0;

#[derive(Component, Debug)]
pub struct CelestialBody {
    /// Self-rotation about the local vertical axis (rad/s).
    pub spin_speed: f32,
    /// Revolution of the position vector about the parent's vertical axis (rad/s).
    pub orbit_speed: f32,
}

pub struct BodyParams {
    pub name: &'static str,
    /// Sphere radius in scene units (already scaled for display).
    pub radius: f32,
    pub texture: &'static str,
    pub axial_tilt_degrees: f32,
    pub spin_speed: f32,
    pub orbit_speed: f32,
    /// Initial position in the parent's local frame.
    pub translation: Vec3,
    /// Parent entity for moons; `None` spawns at the scene root.
    pub parent: Option<Entity>,
    /// Draw a white orbit ring sized to the initial distance from the parent.
    pub orbit_path: bool,
}

pub struct RingParams {
    pub name: &'static str,
    /// Inner edge of the annulus in scene units.
    pub inner_radius: f32,
    /// Radial width of the annulus in scene units.
    pub width: f32,
    pub texture: &'static str,
    pub axial_tilt_degrees: f32,
    pub orbit_speed: f32,
    /// Host planet position, captured once at construction.
    pub translation: Vec3,
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Update, rotate_bodies);
}

/// One motion tick for every body. Children are updated by the same query;
/// the hierarchy composes their transforms with the parent's.
fn rotate_bodies(time: Res<Time>, mut bodies: Query<(&mut Transform, &CelestialBody)>) {
    let dt = time.delta_secs();
    for (mut transform, body) in &mut bodies {
        transform.rotation = motion::spin(transform.rotation, body.spin_speed, dt);
        transform.translation = motion::revolve(transform.translation, body.orbit_speed, dt);
    }
}

/// Spawns a textured sphere body, optionally parented and optionally with
/// an orbit-path visual at the scene root.
pub fn spawn_body(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    params: BodyParams,
) -> Entity {
    let body = commands
        .spawn((
            Name::new(params.name),
            CelestialBody {
                spin_speed: params.spin_speed,
                orbit_speed: params.orbit_speed,
            },
            Mesh3d(meshes.add(Sphere::new(params.radius).mesh().uv(128, 64))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(params.texture)),
                ..default()
            })),
            Transform::from_translation(params.translation)
                .with_rotation(Quat::from_rotation_x(params.axial_tilt_degrees.to_radians())),
        ))
        .id();

    if let Some(parent) = params.parent {
        commands.entity(body).insert(ChildOf(parent));
    }

    if params.orbit_path {
        spawn_orbit_path(commands, meshes, materials, params.name, params.translation.length());
    }

    body
}

/// Spawns a flat ring-system body (planetary rings). The annulus mesh is
/// laid into the orbital plane after the axial tilt is applied; the member
/// never spins and revolves at its host's orbital speed from the host's
/// captured position.
pub fn spawn_ring(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    params: RingParams,
) -> Entity {
    let tilt = params.axial_tilt_degrees.to_radians();
    commands
        .spawn((
            Name::new(params.name),
            CelestialBody {
                spin_speed: 0.0,
                orbit_speed: params.orbit_speed,
            },
            Mesh3d(
                meshes.add(
                    Annulus::new(params.inner_radius, params.inner_radius + params.width)
                        .mesh()
                        .resolution(128),
                ),
            ),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(params.texture)),
                alpha_mode: AlphaMode::Blend,
                double_sided: true,
                cull_mode: None,
                ..default()
            })),
            Transform::from_translation(params.translation)
                .with_rotation(Quat::from_rotation_x(tilt + FRAC_PI_2)),
        ))
        .id()
}

fn spawn_orbit_path(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    name: &'static str,
    orbit_radius: f32,
) {
    commands.spawn((
        Name::new(format!("{name} orbit")),
        Mesh3d(
            meshes.add(
                Torus {
                    minor_radius: ORBIT_PATH_THICKNESS,
                    major_radius: orbit_radius,
                }
                .mesh()
                .major_resolution(128)
                .minor_resolution(32),
            ),
        ),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        NotShadowCaster,
    ));
}
