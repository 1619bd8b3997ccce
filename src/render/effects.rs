//! Crash explosion at the impact site.
//!
//! An expanding orange shockwave ring with radiating particle dots,
//! drawn with gizmos over roughly half a second, then despawned. The
//! satellite mesh is hidden for the Crashed phase so the explosion is
//! the only marker left at the surface.

use bevy::prelude::*;

use crate::camera::RENDER_SCALE;
use crate::physics::ImpactMessage;
use crate::satellite::ResetCommand;

/// Explosion lifetime in wall-clock seconds.
const EXPLOSION_DURATION: f32 = 0.5;

/// Component for a running explosion animation.
#[derive(Component)]
pub struct ExplosionEffect {
    /// Counts up to [`EXPLOSION_DURATION`], then the entity despawns.
    pub timer: Timer,
    /// Impact site in render coordinates.
    pub center: Vec3,
}

/// Plugin spawning and animating crash explosions.
pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (spawn_explosions, animate_explosions, clear_explosions_on_reset),
        );
    }
}

/// Spawn an explosion at each reported impact site.
fn spawn_explosions(mut commands: Commands, mut impacts: MessageReader<ImpactMessage>) {
    for impact in impacts.read() {
        let center = Vec3::new(
            (impact.position.x * RENDER_SCALE) as f32,
            (impact.position.y * RENDER_SCALE) as f32,
            (impact.position.z * RENDER_SCALE) as f32,
        );
        commands.spawn(ExplosionEffect {
            timer: Timer::from_seconds(EXPLOSION_DURATION, TimerMode::Once),
            center,
        });
    }
}

/// Advance and draw explosions, despawning finished ones.
fn animate_explosions(
    mut commands: Commands,
    mut effects: Query<(Entity, &mut ExplosionEffect)>,
    time: Res<Time>,
    mut gizmos: Gizmos,
) {
    for (entity, mut effect) in effects.iter_mut() {
        effect.timer.tick(time.delta());
        if effect.timer.is_finished() {
            commands.entity(entity).despawn();
            continue;
        }

        let progress = effect.timer.fraction();
        draw_explosion(&mut gizmos, effect.center, progress);
    }
}

/// Remove any lingering explosion when the simulation resets.
fn clear_explosions_on_reset(
    mut commands: Commands,
    mut resets: MessageReader<ResetCommand>,
    effects: Query<Entity, With<ExplosionEffect>>,
) {
    if resets.read().next().is_none() {
        return;
    }
    for entity in effects.iter() {
        commands.entity(entity).despawn();
    }
}

/// Draw one frame of the explosion: shockwave ring, bright core, and
/// radiating particles. Sizes grow to roughly the satellite marker's
/// footprint times ten.
fn draw_explosion(gizmos: &mut Gizmos, center: Vec3, progress: f32) {
    // Outer shockwave, expanding and fading
    let outer_radius = 2.0 + progress * 24.0;
    let outer_alpha = (1.0 - progress).powf(0.5);
    let outer_color = Color::srgba(1.0, 0.6, 0.1, outer_alpha);
    draw_circle_segments(gizmos, center, outer_radius, outer_color, 24);

    // Inner yellow ring, fades faster
    let inner_progress = (progress * 1.5).min(1.0);
    let inner_radius = 1.5 + inner_progress * 12.0;
    let inner_alpha = (1.0 - inner_progress).max(0.0);
    let inner_color = Color::srgba(1.0, 0.9, 0.3, inner_alpha);
    draw_circle_segments(gizmos, center, inner_radius, inner_color, 16);

    // Central white flash, very short
    if progress < 0.2 {
        let flash_alpha = 1.0 - progress * 5.0;
        let flash_color = Color::srgba(1.0, 1.0, 1.0, flash_alpha);
        draw_circle_segments(gizmos, center, 1.0, flash_color, 8);
    }

    draw_explosion_particles(gizmos, center, progress, outer_color, 12);
}

/// Draw a circle using line segments.
fn draw_circle_segments(
    gizmos: &mut Gizmos,
    center: Vec3,
    radius: f32,
    color: Color,
    segments: usize,
) {
    let angle_step = std::f32::consts::TAU / segments as f32;

    for i in 0..segments {
        let angle1 = i as f32 * angle_step;
        let angle2 = (i + 1) as f32 * angle_step;

        let p1 = center + Vec3::new(angle1.cos() * radius, angle1.sin() * radius, 0.0);
        let p2 = center + Vec3::new(angle2.cos() * radius, angle2.sin() * radius, 0.0);

        gizmos.line(p1, p2, color);
    }
}

/// Draw particle dots radiating outward from the explosion center.
fn draw_explosion_particles(
    gizmos: &mut Gizmos,
    center: Vec3,
    progress: f32,
    base_color: Color,
    count: usize,
) {
    let angle_step = std::f32::consts::TAU / count as f32;
    let particle_distance = progress * 20.0;
    let particle_alpha = (1.0 - progress).powf(1.5);

    let Srgba {
        red, green, blue, ..
    } = base_color.to_srgba();
    let particle_color = Color::srgba(red, green * 0.9, blue * 0.7, particle_alpha * 0.8);

    for i in 0..count {
        // Offset angle slightly per particle so the spread looks uneven
        let angle = i as f32 * angle_step + progress * 0.5;
        let distance = particle_distance * (0.8 + 0.4 * ((i as f32 * 1.7).sin() * 0.5 + 0.5));

        let particle_pos = center + Vec3::new(angle.cos() * distance, angle.sin() * distance, 0.0);

        // Short crossed lines render as a point-like dot
        let dot_size = 0.4 * (1.0 - progress * 0.5);
        gizmos.line(
            particle_pos - Vec3::new(dot_size, 0.0, 0.0),
            particle_pos + Vec3::new(dot_size, 0.0, 0.0),
            particle_color,
        );
        gizmos.line(
            particle_pos - Vec3::new(0.0, dot_size, 0.0),
            particle_pos + Vec3::new(0.0, dot_size, 0.0),
            particle_color,
        );
    }
}
