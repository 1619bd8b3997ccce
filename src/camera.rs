//! Camera over the orbital plane.
//!
//! Orthographic view looking down the Z axis at the x-y orbital plane,
//! with scroll-wheel zoom and middle-drag pan.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
    camera::ScalingMode,
};

/// Render scale: 1 render unit = 100 km.
/// Earth's radius maps to ~63.7 render units, the default 700 km orbit
/// to ~70.7, so the whole scenario fits in comfortable f32 coordinates.
pub const RENDER_SCALE: f64 = 1e-5;

/// Minimum zoom level (surface close-up).
pub const MIN_ZOOM: f32 = 0.05;

/// Maximum zoom level (wide view for escape trajectories).
pub const MAX_ZOOM: f32 = 50.0;

/// Initial viewport height in render units (~2.8 Earth radii above and
/// below the center, matching the original scene range).
pub const VIEWPORT_HEIGHT: f32 = 360.0;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Pan speed multiplier.
pub const PAN_SPEED: f32 = 1.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_zoom, camera_pan));
    }
}

/// Spawn the main camera with orthographic projection.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: VIEWPORT_HEIGHT,
            },
            scale: 1.0,
            near: -10000.0,
            far: 10000.0,
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_xyz(0.0, 0.0, 1000.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    // Key light off to the side so the Earth sphere reads as a globe.
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            ..default()
        },
        Transform::from_xyz(500.0, 300.0, 800.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    let Ok(mut projection) = camera_query.single_mut() else {
        return;
    };

    let Projection::Orthographic(ref mut ortho) = *projection else {
        return;
    };

    // Logarithmic zoom: multiply scale by factor based on scroll direction
    let zoom_factor = 1.0 - mouse_scroll.delta.y * ZOOM_SPEED;
    ortho.scale = (ortho.scale * zoom_factor).clamp(MIN_ZOOM, MAX_ZOOM);
}

/// Handle middle mouse button drag for panning.
fn camera_pan(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut camera_query: Query<(&mut Transform, &Projection), With<MainCamera>>,
) {
    if !mouse_buttons.pressed(MouseButton::Middle) {
        return;
    }

    let Ok((mut transform, projection)) = camera_query.single_mut() else {
        return;
    };

    let Projection::Orthographic(ortho) = projection else {
        return;
    };

    // Screen motion is in pixels; scale by current zoom level
    let scale_factor = ortho.scale * PAN_SPEED;
    let delta = mouse_motion.delta * scale_factor;

    transform.translation.x -= delta.x;
    transform.translation.y += delta.y; // Invert Y for natural feel
}
