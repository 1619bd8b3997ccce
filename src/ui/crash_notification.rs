//! Crash notification overlay.
//!
//! Shows a centered notification when the satellite hits the surface.
//! The notification can be dismissed, and clears on reset.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::physics::ImpactMessage;
use crate::satellite::ResetCommand;
use crate::types::SimulationPhase;

/// The most recent impact, kept for the notification overlay.
#[derive(Resource, Default)]
pub struct LastImpact {
    pub current: Option<ImpactMessage>,
}

/// Capture impacts and clear them on reset.
pub fn track_impacts(
    mut impacts: MessageReader<ImpactMessage>,
    mut resets: MessageReader<ResetCommand>,
    mut last: ResMut<LastImpact>,
) {
    for impact in impacts.read() {
        last.current = Some(impact.clone());
    }
    if resets.read().next().is_some() {
        last.current = None;
    }
}

/// Render the crash notification while crashed.
pub fn crash_notification(
    mut contexts: EguiContexts,
    last: Res<LastImpact>,
    phase: Res<SimulationPhase>,
    mut reset_commands: MessageWriter<ResetCommand>,
    mut dismissed: Local<bool>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if *phase != SimulationPhase::Crashed {
        *dismissed = false;
        return;
    }

    if *dismissed {
        return;
    }

    let Some(impact) = &last.current else {
        return;
    };

    egui::Window::new("Satellite Lost!")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, -50.0])
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(egui::Color32::from_rgba_unmultiplied(40, 20, 20, 240))
                .stroke(egui::Stroke::new(2.0, egui::Color32::from_rgb(255, 100, 100))),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("\u{1F4A5}").size(32.0));

                ui.add_space(8.0);

                ui.label(
                    egui::RichText::new("Surface impact")
                        .strong()
                        .size(18.0),
                );

                ui.add_space(12.0);

                ui.label(format!("Impact speed: {:.2} km/s", impact.speed_km_s()));

                ui.add_space(16.0);

                ui.label(
                    egui::RichText::new("Press Reset (or R) to try again")
                        .weak()
                        .italics(),
                );

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("Reset").clicked() {
                        reset_commands.write(ResetCommand);
                    }
                    if ui.button("Dismiss").clicked() {
                        *dismissed = true;
                    }
                });
            });
        });
}
