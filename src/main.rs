//! Satsim - Interactive Satellite Orbit Simulator
//!
//! A desktop application for launching a satellite around the Earth,
//! watching the resulting trajectory, and reading off the orbital
//! parameters as it flies.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use satsim::camera::CameraPlugin;
use satsim::input::InputPlugin;
use satsim::physics::PhysicsPlugin;
use satsim::render::RenderPlugin;
use satsim::satellite::SatellitePlugin;
use satsim::types::{PrimaryBody, SimulationPhase};
use satsim::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Satellite Orbit Simulator".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .init_resource::<PrimaryBody>()
        .init_resource::<SimulationPhase>()
        // Add simulation plugins
        .add_plugins((
            CameraPlugin,
            InputPlugin,
            SatellitePlugin,
            PhysicsPlugin,
            RenderPlugin,
            UiPlugin,
        ))
        .run();
}
