//! User-input handling: numeric field parsing and keyboard shortcuts.
//!
//! Field parsing follows a result-type contract: an edit either yields a
//! valid number or a [`InputError::Malformed`] marker that the caller
//! recovers from by keeping the previous valid candidate. No parse
//! failure ever reaches the physics core.

use bevy::math::DVec3;
use bevy::prelude::*;
use thiserror::Error;

use crate::analysis::{CurrentReport, analyze_state};
use crate::satellite::{LaunchCommand, ResetCommand};
use crate::types::{DEFAULT_ALTITUDE, OrbitalState, PrimaryBody, SimulationPhase};

/// Errors produced by user-entered numeric fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The field text is not a finite number. Recovered locally: the
    /// edit is discarded and the last valid value stays in effect.
    #[error("not a number: {0:?}")]
    Malformed(String),
}

/// Parse a numeric text field into a finite f64.
pub fn parse_field(text: &str) -> Result<f64, InputError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::Malformed(text.to_string()))
}

/// Candidate initial conditions edited while the simulation is idle.
///
/// `candidate` always holds the last *valid* state; text fields may
/// transiently contain garbage the user is still typing, which is
/// exactly the state malformed-input recovery preserves. The committed
/// satellite state is only touched on launch or reset.
#[derive(Resource, Clone, Debug)]
pub struct LaunchSettings {
    /// Altitude field contents (km).
    pub altitude_text: String,
    /// Velocity component field contents (m/s).
    pub vx_text: String,
    pub vy_text: String,
    pub vz_text: String,
    /// Last valid candidate state assembled from the fields.
    pub candidate: OrbitalState,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self::for_primary(&PrimaryBody::default())
    }
}

impl LaunchSettings {
    /// Default scenario: 700 km altitude on the +X axis, circular
    /// velocity along +Y (the original's reset state).
    pub fn for_primary(primary: &PrimaryBody) -> Self {
        let r = primary.radius + DEFAULT_ALTITUDE;
        let v_circular = primary.circular_speed(r);
        Self {
            altitude_text: format!("{}", DEFAULT_ALTITUDE / 1000.0),
            vx_text: "0".to_string(),
            vy_text: format!("{}", v_circular as i64),
            vz_text: "0".to_string(),
            candidate: OrbitalState::new(
                DVec3::new(r, 0.0, 0.0),
                DVec3::new(0.0, v_circular, 0.0),
            ),
        }
    }

    /// Apply an altitude edit.
    ///
    /// Moves the candidate to the new radial distance along its current
    /// direction (falling back to +X for a degenerate position), clamps
    /// negative altitudes to zero and rewrites the field, and refills the
    /// Y-velocity field with the circular speed for the new radius.
    pub fn apply_altitude_edit(&mut self, primary: &PrimaryBody) -> Result<(), InputError> {
        let mut altitude_km = parse_field(&self.altitude_text)?;
        if altitude_km < 0.0 {
            altitude_km = 0.0;
            self.altitude_text = "0".to_string();
        }

        let direction = if self.candidate.radius() > 0.0 {
            self.candidate.pos / self.candidate.radius()
        } else {
            DVec3::X
        };

        let r = primary.radius + altitude_km * 1000.0;
        self.candidate.pos = direction * r;

        // Suggest the circular speed for the new radius, as the original
        // does; X and Z components are left to the user.
        self.vy_text = format!("{}", primary.circular_speed(r) as i64);
        self.apply_velocity_edit()
    }

    /// Apply a velocity-component edit. All three fields must parse; a
    /// malformed field leaves the candidate velocity untouched.
    pub fn apply_velocity_edit(&mut self) -> Result<(), InputError> {
        let vx = parse_field(&self.vx_text)?;
        let vy = parse_field(&self.vy_text)?;
        let vz = parse_field(&self.vz_text)?;
        self.candidate.vel = DVec3::new(vx, vy, vz);
        Ok(())
    }

    /// Set the candidate velocity directly (drag gesture) and mirror it
    /// back into the text fields.
    pub fn set_candidate_velocity(&mut self, vel: DVec3) {
        self.candidate.vel = vel;
        self.vx_text = format!("{:.0}", vel.x);
        self.vy_text = format!("{:.0}", vel.y);
        self.vz_text = format!("{:.0}", vel.z);
    }
}

/// Plugin providing keyboard shortcuts.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LaunchSettings>()
            .add_systems(Update, (keyboard_shortcuts, preview_candidate));
    }
}

/// While idle, keep the shared report describing the candidate state so
/// edits preview their orbit before launch. The committed state is not
/// touched.
fn preview_candidate(
    settings: Res<LaunchSettings>,
    phase: Res<SimulationPhase>,
    primary: Res<PrimaryBody>,
    mut report: ResMut<CurrentReport>,
) {
    if *phase == SimulationPhase::Idle && settings.is_changed() {
        report.0 = analyze_state(&settings.candidate, &primary);
    }
}

/// Keyboard shortcuts: Space launches from idle, R resets.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    phase: Res<SimulationPhase>,
    mut launch_commands: MessageWriter<LaunchCommand>,
    mut reset_commands: MessageWriter<ResetCommand>,
) {
    if keys.just_pressed(KeyCode::Space) && *phase == SimulationPhase::Idle {
        launch_commands.write(LaunchCommand);
    }

    if keys.just_pressed(KeyCode::KeyR) {
        reset_commands.write(ResetCommand);
    }
}
