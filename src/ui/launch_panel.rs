//! Control panel: launch parameters, commands, and the orbit readout.
//!
//! A left side panel with editable altitude and velocity fields (only
//! while idle), Launch/Reset buttons, the current phase, and the live
//! orbital parameters report. Field edits apply on change; a field that
//! fails to parse simply leaves the last valid candidate in place until
//! the user fixes it.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::analysis::CurrentReport;
use crate::input::LaunchSettings;
use crate::satellite::{LaunchCommand, ResetCommand};
use crate::types::{PrimaryBody, SimulationPhase};

/// Render the control panel.
#[allow(clippy::too_many_arguments)]
pub fn launch_panel(
    mut contexts: EguiContexts,
    mut settings: ResMut<LaunchSettings>,
    report: Res<CurrentReport>,
    phase: Res<SimulationPhase>,
    primary: Res<PrimaryBody>,
    mut launch_commands: MessageWriter<LaunchCommand>,
    mut reset_commands: MessageWriter<ResetCommand>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("launch_panel")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Satellite Launch");
            ui.add_space(8.0);

            let editable = *phase == SimulationPhase::Idle;

            egui::Grid::new("launch_fields")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Altitude (km)");
                    let altitude = ui.add_enabled(
                        editable,
                        egui::TextEdit::singleline(&mut settings.altitude_text)
                            .desired_width(90.0),
                    );
                    ui.end_row();

                    ui.label("Vx (m/s)");
                    let vx = ui.add_enabled(
                        editable,
                        egui::TextEdit::singleline(&mut settings.vx_text).desired_width(90.0),
                    );
                    ui.end_row();

                    ui.label("Vy (m/s)");
                    let vy = ui.add_enabled(
                        editable,
                        egui::TextEdit::singleline(&mut settings.vy_text).desired_width(90.0),
                    );
                    ui.end_row();

                    ui.label("Vz (m/s)");
                    let vz = ui.add_enabled(
                        editable,
                        egui::TextEdit::singleline(&mut settings.vz_text).desired_width(90.0),
                    );
                    ui.end_row();

                    // A malformed field keeps the previous candidate; the
                    // text stays as typed so the user can finish the edit.
                    if altitude.changed() {
                        let _ = settings.apply_altitude_edit(&primary);
                    }
                    if vx.changed() || vy.changed() || vz.changed() {
                        let _ = settings.apply_velocity_edit();
                    }
                });

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(editable, egui::Button::new("Launch"))
                    .clicked()
                {
                    launch_commands.write(LaunchCommand);
                }
                if ui.button("Reset").clicked() {
                    reset_commands.write(ResetCommand);
                }
            });

            ui.add_space(6.0);
            let (status, status_color) = match *phase {
                SimulationPhase::Idle => ("Ready to launch", egui::Color32::LIGHT_GRAY),
                SimulationPhase::Running => ("In flight", egui::Color32::LIGHT_GREEN),
                SimulationPhase::Crashed => ("Crashed", egui::Color32::LIGHT_RED),
            };
            ui.label(egui::RichText::new(status).color(status_color));

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.heading("Orbital Parameters");
            ui.add_space(6.0);
            orbit_readout(ui, &report);

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new("Space: launch   R: reset\nDrag the arrow to aim")
                    .weak()
                    .small(),
            );
        });
}

/// The live orbit report rows.
fn orbit_readout(ui: &mut egui::Ui, report: &CurrentReport) {
    let r = &report.0;

    egui::Grid::new("orbit_readout")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Altitude");
            ui.label(format!("{:.1} km", r.altitude_km()));
            ui.end_row();

            ui.label("Speed");
            ui.label(format!("{:.1} m/s", r.speed));
            ui.end_row();

            ui.label("Circular speed");
            ui.label(format!(
                "{:.1} m/s ({:.2}x)",
                r.circular_speed,
                r.circular_ratio()
            ));
            ui.end_row();

            ui.label("Escape speed");
            ui.label(format!(
                "{:.1} m/s ({:.2}x)",
                r.escape_speed,
                r.escape_ratio()
            ));
            ui.end_row();

            ui.label("Specific energy");
            ui.label(format!("{:.1} kJ/kg", r.specific_energy / 1000.0));
            ui.end_row();

            ui.label("Orbit type");
            ui.label(r.class.label());
            ui.end_row();

            ui.label("Semi-major axis");
            match r.semi_major_axis {
                Some(a) => ui.label(format!("{:.1} km", a / 1000.0)),
                None => ui.label("N/A (escape trajectory)"),
            };
            ui.end_row();

            ui.label("Period");
            match r.period_minutes() {
                Some(minutes) => ui.label(format!("{minutes:.1} min")),
                None => ui.label("N/A (escape trajectory)"),
            };
            ui.end_row();
        });
}
