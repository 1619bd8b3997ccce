//! egui-based interface: control panel, crash overlay, and the
//! draggable velocity arrow.

mod crash_notification;
mod launch_panel;
pub mod velocity_handle;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use crash_notification::LastImpact;
pub use velocity_handle::VelocityHandlePlugin;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LastImpact>()
            .add_plugins(VelocityHandlePlugin)
            .add_systems(Update, crash_notification::track_impacts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    launch_panel::launch_panel,
                    crash_notification::crash_notification,
                ),
            );
    }
}
