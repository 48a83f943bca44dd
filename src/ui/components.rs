//! Shared UI components.

use eframe::egui::{self, Color32, Response, RichText, Sense, StrokeKind, Ui};
use egui_phosphor::regular::{CARET_RIGHT, CHECK_CIRCLE};

use crate::curriculum::Phase;

/// Render a clickable row for one curriculum phase.
///
/// Returns the response which can be checked for `.clicked()`.
pub fn phase_row(ui: &mut Ui, phase: &Phase, completed: bool) -> Response {
    let size = egui::vec2(ui.available_width(), 56.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);

        // Row background
        ui.painter().rect_filled(rect, 8.0, visuals.bg_fill);
        ui.painter()
            .rect_stroke(rect, 8.0, visuals.bg_stroke, StrokeKind::Outside);

        // Phase number badge (left)
        let badge_center = egui::pos2(rect.left() + 36.0, rect.center().y);
        ui.painter().circle_filled(badge_center, 16.0, colors::BADGE);
        ui.painter().text(
            badge_center,
            egui::Align2::CENTER_CENTER,
            phase.number.to_string(),
            egui::FontId::proportional(15.0),
            Color32::WHITE,
        );

        // Title and duration
        let title_pos = egui::pos2(rect.left() + 68.0, rect.center().y - 10.0);
        ui.painter().text(
            title_pos,
            egui::Align2::LEFT_CENTER,
            phase.title,
            egui::FontId::proportional(16.0),
            visuals.text_color(),
        );
        let duration_pos = egui::pos2(rect.left() + 68.0, rect.center().y + 11.0);
        ui.painter().text(
            duration_pos,
            egui::Align2::LEFT_CENTER,
            phase.duration,
            egui::FontId::proportional(12.0),
            ui.visuals().weak_text_color(),
        );

        // Completion marker and chevron (right)
        let chevron_pos = egui::pos2(rect.right() - 24.0, rect.center().y);
        ui.painter().text(
            chevron_pos,
            egui::Align2::CENTER_CENTER,
            CARET_RIGHT,
            egui::FontId::proportional(18.0),
            ui.visuals().weak_text_color(),
        );
        if completed {
            let check_pos = egui::pos2(rect.right() - 56.0, rect.center().y);
            ui.painter().text(
                check_pos,
                egui::Align2::CENTER_CENTER,
                CHECK_CIRCLE,
                egui::FontId::proportional(20.0),
                colors::SUCCESS,
            );
        }
    }

    response
}

/// Render a stat card with title, value, and subtitle.
pub fn stat_card(ui: &mut Ui, title: &str, value: &str, subtitle: &str) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(egui::Margin::same(15))
        .outer_margin(egui::Margin::same(5))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(130.0);

            ui.vertical(|ui| {
                ui.label(RichText::new(title).small());
                ui.label(RichText::new(value).heading().strong());
                ui.label(RichText::new(subtitle).small().weak());
            });
        });
}

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const BADGE: Color32 = Color32::from_rgb(99, 102, 241);
}

/// Render a back button that returns true when clicked.
pub fn back_button(ui: &mut Ui) -> bool {
    ui.button(RichText::new("< Back to Dashboard").size(14.0)).clicked()
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(24.0));
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}
