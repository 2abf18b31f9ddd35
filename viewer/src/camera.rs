use crate::input::InputAction;
use bevy::{input::mouse::AccumulatedMouseMotion, prelude::*};
use leafwing_input_manager::prelude::*;

const CAMERA_FOV_DEGREES: f32 = 50.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 200_000_000.0;
const CAMERA_START: Vec3 = Vec3::new(0.0, 50_000.0, 400_000.0);
/// Fly speed in scene units per second.
const FLY_SPEED: f32 = 2_000_000.0;
/// Mouse-look sensitivity in radians per pixel of drag.
const LOOK_SENSITIVITY: f32 = 0.0035;
/// Pitch is kept just short of straight up/down to avoid gimbal flips.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera);
    app.add_systems(Update, fly_camera);
}

fn add_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Free-fly controller: WASD + R/F translate along the camera's local
/// axes, mouse look while the right button is held. All movement scales
/// with the frame delta.
fn fly_camera(
    time: Res<Time>,
    actions: Res<ActionState<InputAction>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut camera: Single<&mut Transform, With<Camera3d>>,
) {
    let dt = time.delta_secs();

    if actions.pressed(&InputAction::DragLook) && mouse_motion.delta != Vec2::ZERO {
        let (mut yaw, mut pitch, _) = camera.rotation.to_euler(EulerRot::YXZ);
        yaw -= mouse_motion.delta.x * LOOK_SENSITIVITY;
        pitch = (pitch - mouse_motion.delta.y * LOOK_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        camera.rotation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
    }

    let mut axis = Vec3::ZERO;
    if actions.pressed(&InputAction::FlyForward) {
        axis.z -= 1.0;
    }
    if actions.pressed(&InputAction::FlyBackward) {
        axis.z += 1.0;
    }
    if actions.pressed(&InputAction::FlyLeft) {
        axis.x -= 1.0;
    }
    if actions.pressed(&InputAction::FlyRight) {
        axis.x += 1.0;
    }
    if actions.pressed(&InputAction::FlyUp) {
        axis.y += 1.0;
    }
    if actions.pressed(&InputAction::FlyDown) {
        axis.y -= 1.0;
    }

    if axis != Vec3::ZERO {
        let step = camera.rotation * (axis.normalize() * FLY_SPEED * dt);
        camera.translation += step;
    }
}
