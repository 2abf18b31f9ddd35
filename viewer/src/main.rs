// Support configuring Bevy lints within code.
#![cfg_attr(bevy_lint, feature(register_tool), register_tool(bevy))]
// Disable console on Windows for non-dev builds.
#![cfg_attr(not(feature = "dev"), windows_subsystem = "windows")]

#[cfg(feature = "dev_native")]
mod debug_tools;

mod asteroid_belt;
mod camera;
mod celestial;
mod input;
mod skybox;
mod solar_system;
mod sun;

use bevy::prelude::*;

fn main() -> AppExit {
    App::new().add_plugins(AppPlugin).run()
}

pub struct AppPlugin;
impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Window {
                title: "Solar System".to_string(),
                ..default()
            }
            .into(),
            ..default()
        }));

        app.add_plugins((
            input::plugin,
            camera::plugin,
            skybox::plugin,
            sun::plugin,
            celestial::plugin,
            solar_system::plugin,
            asteroid_belt::plugin,
        ));

        #[cfg(feature = "dev_native")]
        app.add_plugins(debug_tools::plugin);
    }
}
