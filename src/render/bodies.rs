//! Earth and satellite meshes, synced from the physics state.

use bevy::prelude::*;

use crate::camera::RENDER_SCALE;
use crate::input::LaunchSettings;
use crate::satellite::Satellite;
use crate::types::{PrimaryBody, SimulationPhase};

/// Render radius of the satellite marker, in render units. Deliberately
/// oversized; the physical satellite would be subpixel.
pub const SATELLITE_RENDER_RADIUS: f32 = 2.0;

/// Marker component for the Earth mesh.
#[derive(Component)]
pub struct EarthVisual;

/// Marker component for the satellite mesh.
#[derive(Component)]
pub struct SatelliteVisual;

/// Plugin spawning and syncing the body meshes.
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bodies)
            .add_systems(Update, sync_satellite_visual);
    }
}

/// Spawn the Earth at the origin and the satellite marker.
fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    primary: Res<PrimaryBody>,
) {
    let earth_radius = (primary.radius * RENDER_SCALE) as f32;
    commands.spawn((
        EarthVisual,
        Mesh3d(meshes.add(Sphere::new(earth_radius).mesh().uv(64, 32))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.16, 0.42, 0.75),
            perceptual_roughness: 0.9,
            metallic: 0.0,
            ..default()
        })),
        Transform::IDENTITY,
    ));

    commands.spawn((
        SatelliteVisual,
        Mesh3d(meshes.add(Sphere::new(SATELLITE_RENDER_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.9, 0.15, 0.1),
            emissive: LinearRgba::new(0.4, 0.05, 0.03, 1.0),
            ..default()
        })),
        Transform::IDENTITY,
    ));
}

/// Keep the satellite marker on the physics position.
///
/// While idle the marker previews the candidate state (so altitude edits
/// move it); once launched it follows the committed state. Hidden after
/// a crash, where the explosion takes over.
fn sync_satellite_visual(
    mut satellite_query: Query<(&mut Transform, &mut Visibility), With<SatelliteVisual>>,
    satellite: Res<Satellite>,
    settings: Res<LaunchSettings>,
    phase: Res<SimulationPhase>,
) {
    let Ok((mut transform, mut visibility)) = satellite_query.single_mut() else {
        return;
    };

    let pos = match *phase {
        SimulationPhase::Idle => settings.candidate.pos,
        _ => satellite.state.pos,
    };

    transform.translation = Vec3::new(
        (pos.x * RENDER_SCALE) as f32,
        (pos.y * RENDER_SCALE) as f32,
        (pos.z * RENDER_SCALE) as f32,
    );

    *visibility = if *phase == SimulationPhase::Crashed {
        Visibility::Hidden
    } else {
        Visibility::Visible
    };
}
