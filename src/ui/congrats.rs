//! Congratulations overlay with the confetti field and staged reveal.

use std::f32::consts::FRAC_PI_2;
use std::time::Instant;

use eframe::egui::{self, Rect, RichText, Shape, Stroke, Ui, Vec2};
use egui_phosphor::regular::CONFETTI;

use crate::curriculum::ModuleId;
use crate::effects::{
    self, DELAY_MAX_SECS, FALL_MAX_SECS, Particle, ParticleShape, RevealSequence, RevealStage,
};

/// Congratulations screen state. The particle field is generated once at
/// mount and discarded with the screen.
pub struct CongratsScreen {
    module: ModuleId,
    mounted: Instant,
    particles: Vec<Particle>,
    reveal: RevealSequence,
    continued: bool,
}

impl CongratsScreen {
    pub fn new(module: ModuleId, particle_count: usize, reveal_offsets_secs: [f32; 3]) -> Self {
        Self {
            module,
            mounted: Instant::now(),
            particles: effects::spawn_particles(particle_count),
            reveal: RevealSequence::new(reveal_offsets_secs),
            continued: false,
        }
    }

    pub fn module(&self) -> ModuleId {
        self.module
    }
}

/// Show the congratulations screen.
///
/// Returns `true` when the learner clicks Continue.
pub fn show(state: &mut CongratsScreen, display_name: &str, ui: &mut Ui) -> bool {
    let elapsed = state.mounted.elapsed().as_secs_f32();
    let rect = ui.max_rect();

    paint_particles(ui, rect, &state.particles, elapsed);

    let phase = crate::curriculum::phase_for(state.module);
    let mut clicked = false;

    ui.vertical_centered(|ui| {
        ui.add_space(rect.height() * 0.22);

        // Stage 1: icon
        if state.reveal.visible(RevealStage::Icon, elapsed) {
            let fade = state.reveal.fade(RevealStage::Icon, elapsed);
            ui.add_space(10.0 * (1.0 - fade));
            let color = ui.visuals().strong_text_color().gamma_multiply(fade);
            ui.label(RichText::new(CONFETTI).size(64.0).color(color));
        } else {
            ui.add_space(74.0);
        }

        ui.add_space(16.0);

        // Stage 2: text
        if state.reveal.visible(RevealStage::Text, elapsed) {
            let fade = state.reveal.fade(RevealStage::Text, elapsed);
            let strong = ui.visuals().strong_text_color().gamma_multiply(fade);
            let weak = ui.visuals().weak_text_color().gamma_multiply(fade);

            ui.label(
                RichText::new(format!("Congratulations, {display_name}!"))
                    .size(30.0)
                    .strong()
                    .color(strong),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("You completed Phase {}: {}", phase.number, phase.title))
                    .size(16.0)
                    .color(strong),
            );
            ui.add_space(4.0);
            ui.label(RichText::new(state.module.as_str()).small().color(weak));
        }

        ui.add_space(24.0);

        // Stage 3: button
        if state.reveal.visible(RevealStage::Button, elapsed)
            && ui.button(RichText::new("Continue").size(15.0)).clicked()
            && !state.continued
        {
            state.continued = true;
            clicked = true;
        }
    });

    // Keep repainting while anything is still animating.
    if !state.reveal.settled(elapsed) || elapsed < DELAY_MAX_SECS + FALL_MAX_SECS {
        ui.ctx().request_repaint();
    }

    clicked
}

/// Paint the confetti field for the current frame. Pose is derived from
/// elapsed time; particles outside their fall window are skipped.
fn paint_particles(ui: &Ui, rect: Rect, particles: &[Particle], elapsed: f32) {
    let painter = ui.painter();

    for p in particles {
        let Some(t) = p.fall_progress(elapsed) else {
            continue;
        };

        let x = rect.left() + rect.width() * p.x_percent / 100.0;
        // Enter just above the top edge, exit just below the bottom.
        let y = rect.top() + rect.height() * (t * 1.1 - 0.05);
        let pos = egui::pos2(x, y);

        // Fade out over the last stretch of the fall.
        let alpha = if t > 0.85 { 1.0 - (t - 0.85) / 0.15 } else { 1.0 };
        let color = p.color.gamma_multiply(alpha);

        let angle = p.angle(elapsed);
        match p.shape {
            ParticleShape::Circle => {
                painter.circle_filled(pos, p.size / 2.0, color);
            }
            ParticleShape::Square => {
                let u = Vec2::angled(angle) * (p.size / 2.0);
                let v = Vec2::angled(angle + FRAC_PI_2) * (p.size / 2.0);
                painter.add(Shape::convex_polygon(
                    vec![pos - u - v, pos + u - v, pos + u + v, pos - u + v],
                    color,
                    Stroke::NONE,
                ));
            }
            ParticleShape::Streamer => {
                let dir = Vec2::angled(angle) * p.size;
                painter.line_segment([pos - dir, pos + dir], Stroke::new(2.5, color));
            }
        }
    }
}
