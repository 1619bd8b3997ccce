//! Rendering for the satellite simulator: the Earth and satellite
//! meshes, the breadcrumb trail, and the crash explosion.

pub mod bodies;
pub mod effects;
pub mod trail;

use bevy::prelude::*;

use self::bodies::BodiesPlugin;
use self::effects::EffectsPlugin;
use self::trail::TrailPlugin;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BodiesPlugin, TrailPlugin, EffectsPlugin));
    }
}
