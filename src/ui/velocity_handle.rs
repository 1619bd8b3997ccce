//! Draggable velocity arrow on the idle satellite.
//!
//! While the simulation is idle, an arrow at the candidate launch
//! position shows the candidate velocity. Dragging the arrow tip edits
//! the in-plane velocity components directly; the text fields mirror
//! the result. Once launched the arrow disappears, as the committed
//! state is no longer editable.

use bevy::math::DVec3;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::{MainCamera, RENDER_SCALE};
use crate::input::LaunchSettings;
use crate::types::SimulationPhase;

/// Plugin for velocity arrow interaction.
pub struct VelocityHandlePlugin;

impl Plugin for VelocityHandlePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VelocityDragState>()
            .add_systems(Update, (handle_velocity_drag, draw_velocity_handle));
    }
}

/// State for the velocity arrow drag gesture.
#[derive(Resource, Default)]
pub struct VelocityDragState {
    /// Currently dragging the arrow tip.
    pub dragging: bool,
}

/// Convert velocity magnitude to arrow length using square root scale.
///
/// Square root scaling keeps the 1-12 km/s range of orbital and escape
/// speeds well resolved without letting extreme inputs run off screen.
fn velocity_to_arrow_length(vel_magnitude: f64) -> f32 {
    const MIN_LENGTH: f32 = 1.0;
    const MAX_LENGTH: f32 = 30.0;
    const SCALE_FACTOR: f32 = 3.5;

    if vel_magnitude < 1.0 {
        return MIN_LENGTH;
    }

    let vel_km_s = (vel_magnitude / 1000.0) as f32;
    let length = MIN_LENGTH + vel_km_s.sqrt() * SCALE_FACTOR;
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Convert arrow length back to velocity magnitude.
/// Caps at MAX_LENGTH for consistency with velocity_to_arrow_length.
fn arrow_length_to_velocity(length: f32) -> f64 {
    const MIN_LENGTH: f32 = 1.0;
    const MAX_LENGTH: f32 = 30.0;
    const SCALE_FACTOR: f32 = 3.5;

    let capped_length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    if capped_length <= MIN_LENGTH {
        return 0.0;
    }

    let sqrt_v_km_s = (capped_length - MIN_LENGTH) / SCALE_FACTOR;
    (sqrt_v_km_s * sqrt_v_km_s) as f64 * 1000.0
}

/// In-plane arrow direction for the candidate velocity, falling back to
/// +X when the planar component is negligible.
fn arrow_direction(vel: DVec3) -> Vec2 {
    let planar = Vec2::new(vel.x as f32, vel.y as f32);
    if planar.length() < 1e-3 {
        Vec2::X
    } else {
        planar.normalize()
    }
}

/// Candidate launch position in render coordinates.
fn candidate_render_pos(settings: &LaunchSettings) -> Vec2 {
    Vec2::new(
        (settings.candidate.pos.x * RENDER_SCALE) as f32,
        (settings.candidate.pos.y * RENDER_SCALE) as f32,
    )
}

/// Handle mouse interaction with the velocity arrow tip.
fn handle_velocity_drag(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    phase: Res<SimulationPhase>,
    mut settings: ResMut<LaunchSettings>,
    mut drag_state: ResMut<VelocityDragState>,
    mut contexts: EguiContexts,
) {
    if *phase != SimulationPhase::Idle {
        drag_state.dragging = false;
        return;
    }

    // Only defer to egui when not already dragging; a drag that passes
    // over a panel must still see its updates and the release.
    if !drag_state.dragging
        && let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor_pos) else {
        return;
    };

    let base = candidate_render_pos(&settings);
    let vel = settings.candidate.vel;
    let tip_pos = base + arrow_direction(vel) * velocity_to_arrow_length(vel.length());

    let hovering_tip = (world_pos - tip_pos).length() < 4.0;
    if let Ok(ctx) = contexts.ctx_mut() {
        if drag_state.dragging {
            ctx.set_cursor_icon(bevy_egui::egui::CursorIcon::Grabbing);
        } else if hovering_tip {
            ctx.set_cursor_icon(bevy_egui::egui::CursorIcon::Grab);
        }
    }

    if mouse.just_pressed(MouseButton::Left) && !drag_state.dragging && hovering_tip {
        drag_state.dragging = true;
    }

    if drag_state.dragging && mouse.pressed(MouseButton::Left) {
        let delta = world_pos - base;
        let length = delta.length();

        // The drag edits the orbital-plane components; any out-of-plane
        // component entered by hand is preserved.
        let new_vel = if length > 0.5 {
            let direction = delta.normalize();
            let magnitude = arrow_length_to_velocity(length);
            DVec3::new(
                direction.x as f64 * magnitude,
                direction.y as f64 * magnitude,
                vel.z,
            )
        } else {
            DVec3::new(0.0, 0.0, vel.z)
        };
        settings.set_candidate_velocity(new_vel);
    }

    if mouse.just_released(MouseButton::Left) && drag_state.dragging {
        drag_state.dragging = false;
        info!(
            "Launch velocity set to {:.2} km/s",
            settings.candidate.vel.length() / 1000.0
        );
    }
}

/// Draw the velocity arrow while idle.
fn draw_velocity_handle(
    settings: Res<LaunchSettings>,
    phase: Res<SimulationPhase>,
    drag_state: Res<VelocityDragState>,
    mut gizmos: Gizmos,
) {
    if *phase != SimulationPhase::Idle {
        return;
    }

    let base2 = candidate_render_pos(&settings);
    let base = Vec3::new(base2.x, base2.y, 1.0);
    let vel = settings.candidate.vel;

    let color = if drag_state.dragging {
        Color::srgba(1.0, 1.0, 0.0, 1.0)
    } else {
        Color::srgba(0.3, 0.85, 0.95, 0.95)
    };

    draw_arrow(
        &mut gizmos,
        base,
        arrow_direction(vel),
        velocity_to_arrow_length(vel.length()),
        color,
    );
}

/// Draw an arrow with arrowhead and a grip circle at the tip.
fn draw_arrow(gizmos: &mut Gizmos, base: Vec3, direction: Vec2, length: f32, color: Color) {
    let tip = base + Vec3::new(direction.x * length, direction.y * length, 0.0);

    gizmos.line(base, tip, color);

    // Arrowhead (two lines at ~30 degrees)
    let head_size = (length * 0.15).max(1.0);
    let angle = direction.y.atan2(direction.x);

    for offset in [-0.5_f32, 0.5_f32] {
        let head_angle = angle + std::f32::consts::PI + offset;
        let head_end = tip
            + Vec3::new(
                head_angle.cos() * head_size,
                head_angle.sin() * head_size,
                0.0,
            );
        gizmos.line(tip, head_end, color);
    }

    // Grip circle at the tip marks the draggable spot
    let tip_radius = 0.8;
    let segments = 12;
    for i in 0..segments {
        let t0 = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let t1 = ((i + 1) as f32 / segments as f32) * std::f32::consts::TAU;

        let p0 = tip + Vec3::new(tip_radius * t0.cos(), tip_radius * t0.sin(), 0.0);
        let p1 = tip + Vec3::new(tip_radius * t1.cos(), tip_radius * t1.sin(), 0.0);

        gizmos.line(p0, p1, color);
    }
}
