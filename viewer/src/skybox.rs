use bevy::{
    light::{NotShadowCaster, NotShadowReceiver},
    prelude::*,
};
use std::f32::consts::{FRAC_PI_2, PI};

/// Edge length of the background cube.
const SKYBOX_SIZE: f32 = 199_000_000.0;

#[derive(Component)]
struct SkyboxRoot;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_skybox);
    app.add_systems(PostUpdate, follow_camera);
}

fn spawn_skybox(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let half = SKYBOX_SIZE / 2.0;
    let face = meshes.add(Rectangle::new(SKYBOX_SIZE, SKYBOX_SIZE));

    // One textured quad per cube face, each turned to face the interior.
    let faces: [(&str, Vec3, Quat); 6] = [
        ("skybox/space_ft.png", Vec3::new(0.0, 0.0, -half), Quat::IDENTITY),
        ("skybox/space_bk.png", Vec3::new(0.0, 0.0, half), Quat::from_rotation_y(PI)),
        ("skybox/space_up.png", Vec3::new(0.0, half, 0.0), Quat::from_rotation_x(FRAC_PI_2)),
        ("skybox/space_dn.png", Vec3::new(0.0, -half, 0.0), Quat::from_rotation_x(-FRAC_PI_2)),
        ("skybox/space_rt.png", Vec3::new(half, 0.0, 0.0), Quat::from_rotation_y(-FRAC_PI_2)),
        ("skybox/space_lf.png", Vec3::new(-half, 0.0, 0.0), Quat::from_rotation_y(FRAC_PI_2)),
    ];

    let root = commands
        .spawn((
            Name::new("Skybox"),
            SkyboxRoot,
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    for (texture, offset, facing) in faces {
        commands.spawn((
            Mesh3d(face.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(texture)),
                unlit: true,
                ..default()
            })),
            Transform::from_translation(offset).with_rotation(facing),
            NotShadowCaster,
            NotShadowReceiver,
            ChildOf(root),
        ));
    }
}

/// The skybox is always centered on the camera so its faces never come
/// into reach.
fn follow_camera(
    camera: Single<&Transform, (With<Camera3d>, Without<SkyboxRoot>)>,
    mut skybox: Single<&mut Transform, With<SkyboxRoot>>,
) {
    skybox.translation = camera.translation;
}
