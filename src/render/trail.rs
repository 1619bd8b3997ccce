//! Breadcrumb trail behind the running satellite.
//!
//! One point every 10th physics tick, keeping the most recent 500 points
//! (the original's `interval=10, retain=500`). Cleared on reset.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::camera::RENDER_SCALE;
use crate::satellite::{ResetCommand, Satellite};
use crate::types::SimulationPhase;

/// Ticks between trail points.
const TRAIL_INTERVAL: u64 = 10;

/// Maximum retained trail points.
const TRAIL_RETAIN: usize = 500;

/// Render radius of one trail point.
const POINT_RADIUS: f32 = 0.6;

/// Marker component for a trail point entity.
#[derive(Component)]
pub struct TrailPoint;

/// Bookkeeping for the trail entity pool.
#[derive(Resource, Default)]
pub struct TrailState {
    ticks: u64,
    points: VecDeque<Entity>,
    /// Shared assets, created on first use.
    mesh: Option<Handle<Mesh>>,
    material: Option<Handle<StandardMaterial>>,
}

/// Plugin recording and clearing the trail.
pub struct TrailPlugin;

impl Plugin for TrailPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrailState>()
            // After the physics tick in the same schedule, so the point
            // lands on the freshly stepped position.
            .add_systems(FixedUpdate, record_trail.after(crate::physics::PhysicsSet))
            .add_systems(Update, clear_trail_on_reset);
    }
}

/// Drop a trail point every `TRAIL_INTERVAL` ticks while running.
fn record_trail(
    mut commands: Commands,
    mut trail: ResMut<TrailState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    satellite: Res<Satellite>,
    phase: Res<SimulationPhase>,
) {
    if !phase.is_running() {
        return;
    }

    trail.ticks += 1;
    if !trail.ticks.is_multiple_of(TRAIL_INTERVAL) {
        return;
    }

    let mesh = trail
        .mesh
        .get_or_insert_with(|| meshes.add(Sphere::new(POINT_RADIUS)))
        .clone();
    let material = trail
        .material
        .get_or_insert_with(|| {
            materials.add(StandardMaterial {
                base_color: Color::srgb(0.85, 0.35, 0.25),
                unlit: true,
                ..default()
            })
        })
        .clone();

    let pos = satellite.state.pos;
    let entity = commands
        .spawn((
            TrailPoint,
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_xyz(
                (pos.x * RENDER_SCALE) as f32,
                (pos.y * RENDER_SCALE) as f32,
                (pos.z * RENDER_SCALE) as f32,
            ),
        ))
        .id();

    trail.points.push_back(entity);
    while trail.points.len() > TRAIL_RETAIN {
        if let Some(oldest) = trail.points.pop_front() {
            commands.entity(oldest).despawn();
        }
    }
}

/// Despawn all trail points when the simulation resets.
fn clear_trail_on_reset(
    mut commands: Commands,
    mut resets: MessageReader<ResetCommand>,
    mut trail: ResMut<TrailState>,
) {
    if resets.read().next().is_none() {
        return;
    }

    for entity in trail.points.drain(..) {
        commands.entity(entity).despawn();
    }
    trail.ticks = 0;
}
