//! Phase dashboard with the curriculum table and recent activity log.

use std::collections::HashSet;

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, ScrollArea, Ui};

use crate::curriculum::{CATALOG, ModuleId};

use super::app::{ActivityEntry, LogLevel};
use super::components::{phase_row, stat_card};

/// Show the phase dashboard.
///
/// Returns `Some(module)` if a phase row was clicked.
pub fn show(completed: &HashSet<ModuleId>, activity: &[ActivityEntry], ui: &mut Ui) -> Option<ModuleId> {
    let mut clicked = None;

    ui.vertical_centered(|ui| {
        ui.add_space(30.0);

        // Header
        ui.label(RichText::new("Bootcamp Tracker").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("Your learning journey, phase by phase").size(14.0).weak());

        ui.add_space(20.0);

        // Stat cards row
        ui.horizontal(|ui| {
            let available = ui.available_width();
            let start_offset = ((available - 450.0) / 2.0).max(0.0);
            ui.add_space(start_offset);

            stat_card(ui, "Phases", &CATALOG.len().to_string(), "In the curriculum");
            stat_card(ui, "Completed", &completed.len().to_string(), "Modules finished");
            stat_card(
                ui,
                "Remaining",
                &(CATALOG.len() - completed.len()).to_string(),
                "Modules to go",
            );
        });

        ui.add_space(20.0);
    });

    // Phase table
    ScrollArea::vertical().show(ui, |ui| {
        egui::Frame::new()
            .outer_margin(Margin::symmetric(40, 0))
            .show(ui, |ui| {
                for phase in &CATALOG {
                    if phase_row(ui, phase, completed.contains(&phase.module)).clicked() {
                        clicked = Some(phase.module);
                    }
                    ui.add_space(8.0);
                }
            });

        ui.add_space(12.0);

        // Recent Activity
        egui::Frame::new()
            .fill(ui.style().visuals.extreme_bg_color)
            .inner_margin(Margin::same(15))
            .outer_margin(Margin::symmetric(40, 0))
            .corner_radius(CornerRadius::same(8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.label(RichText::new("Recent Activity").strong());
                ui.add_space(10.0);

                if activity.is_empty() {
                    ui.label(RichText::new("No recent activity").weak());
                } else {
                    for entry in activity.iter().rev().take(10) {
                        let color = match entry.level {
                            LogLevel::Info => Color32::GRAY,
                            LogLevel::Success => Color32::from_rgb(100, 200, 100),
                        };

                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                    .small()
                                    .color(Color32::DARK_GRAY),
                            );
                            ui.label(RichText::new(&entry.message).color(color));
                        });
                    }
                }
            });

        ui.add_space(20.0);
    });

    clicked
}
