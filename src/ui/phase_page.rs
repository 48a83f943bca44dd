//! Per-phase curriculum page.

use eframe::egui::{self, CornerRadius, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::CHECK_CIRCLE;

use crate::curriculum::Phase;

use super::components::{back_button, colors, panel_header};

/// Navigation intent reported by the phase page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    GoBack,
    Complete,
}

/// Show one phase's curriculum page.
pub fn show(phase: &Phase, completed: bool, ui: &mut Ui) -> Action {
    let mut action = Action::None;

    if back_button(ui) {
        action = Action::GoBack;
    }

    ui.add_space(10.0);
    panel_header(ui, &format!("Phase {}: {}", phase.number, phase.title));

    ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Duration:").strong());
            ui.label(phase.duration);
            ui.add_space(20.0);
            ui.label(RichText::new("Module:").strong());
            ui.label(RichText::new(phase.module.as_str()).weak());
        });

        ui.add_space(15.0);
        ui.label(RichText::new(phase.summary).size(15.0));
        ui.add_space(20.0);

        if phase.has_detail() {
            ui.label(RichText::new("What you'll learn").strong());
            ui.add_space(10.0);

            for topic in phase.topics {
                egui::Frame::new()
                    .fill(ui.style().visuals.extreme_bg_color)
                    .inner_margin(Margin::same(12))
                    .corner_radius(CornerRadius::same(8))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(topic.title).size(15.0).strong());
                        ui.add_space(4.0);
                        ui.label(RichText::new(topic.detail).weak());
                    });
                ui.add_space(8.0);
            }
        } else {
            ui.label(
                RichText::new("The full topic breakdown is published when this phase unlocks.")
                    .weak(),
            );
        }

        ui.add_space(20.0);
        ui.separator();
        ui.add_space(12.0);

        if completed {
            ui.horizontal(|ui| {
                ui.label(RichText::new(CHECK_CIRCLE).size(18.0).color(colors::SUCCESS));
                ui.colored_label(colors::SUCCESS, "Module completed");
            });
        } else if ui.button(RichText::new("Mark module complete").size(14.0)).clicked() {
            action = Action::Complete;
        }

        ui.add_space(20.0);
    });

    action
}
