use crate::celestial::CelestialBody;
use bevy::{light::NotShadowCaster, prelude::*};
use sim::scale_kilometers;

/// Radius of the sun in kilometers; drawn at true scale, without the
/// planet display factor.
const SUN_RADIUS_KM: f32 = 1_400_000.0;
/// Fixed slow self-rotation (rad/s).
const SUN_SPIN_SPEED: f32 = 0.1;
/// Point-light intensity in lumens, sized for planetary distances.
const SUNLIGHT_INTENSITY: f32 = 1.0e18;
/// Lit range; covers the whole compressed system.
const SUNLIGHT_RANGE: f32 = 1.0e9;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_sun);
}

fn spawn_sun(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let sun = commands
        .spawn((
            Name::new("Sun"),
            CelestialBody {
                spin_speed: SUN_SPIN_SPEED,
                orbit_speed: 0.0,
            },
            Mesh3d(meshes.add(Sphere::new(scale_kilometers(SUN_RADIUS_KM)).mesh().uv(128, 64))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load("stars/sun.jpeg")),
                unlit: true,
                ..default()
            })),
            Transform::from_xyz(0.0, 0.0, 0.0),
            NotShadowCaster,
        ))
        .id();

    // The sun is the scene's light source; everything else is lit by it.
    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: SUNLIGHT_INTENSITY,
            range: SUNLIGHT_RANGE,
            shadows_enabled: true,
            ..default()
        },
        Transform::default(),
        ChildOf(sun),
    ));
}
