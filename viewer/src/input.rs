use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    FlyForward,
    FlyBackward,
    FlyLeft,
    FlyRight,
    FlyUp,
    FlyDown,
    /// Mouse look is active only while this is held (drag to look).
    DragLook,
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    let mut input_map = InputMap::<InputAction>::default();
    input_map.insert(InputAction::FlyForward, KeyCode::KeyW);
    input_map.insert(InputAction::FlyBackward, KeyCode::KeyS);
    input_map.insert(InputAction::FlyLeft, KeyCode::KeyA);
    input_map.insert(InputAction::FlyRight, KeyCode::KeyD);
    input_map.insert(InputAction::FlyUp, KeyCode::KeyR);
    input_map.insert(InputAction::FlyDown, KeyCode::KeyF);
    input_map.insert(InputAction::DragLook, MouseButton::Right);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<InputAction>::default());
}
