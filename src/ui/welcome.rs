//! Welcome screen with branding and auto-advance.

use std::time::{Duration, Instant};

use eframe::egui::{RichText, Ui};

use crate::effects::AutoAdvance;

/// Seconds the greeting takes to fade in.
const FADE_IN_SECS: f32 = 0.6;

/// Welcome screen state. Dropped on screen switch, which cancels the
/// pending auto-advance.
pub struct WelcomeScreen {
    mounted: Instant,
    timer: AutoAdvance,
    advanced: bool,
}

impl WelcomeScreen {
    pub fn new(welcome_secs: f32) -> Self {
        Self {
            mounted: Instant::now(),
            timer: AutoAdvance::new(Duration::from_secs_f32(welcome_secs)),
            advanced: false,
        }
    }

    /// Consume the single advance this screen may report.
    fn advance(&mut self) -> bool {
        if self.advanced {
            return false;
        }
        self.advanced = true;
        true
    }
}

/// Show the welcome screen.
///
/// Returns `true` exactly once, when the auto-advance timer fires or
/// the learner clicks Skip.
pub fn show(state: &mut WelcomeScreen, display_name: &str, ui: &mut Ui) -> bool {
    let elapsed = state.mounted.elapsed().as_secs_f32();
    let fade = (elapsed / FADE_IN_SECS).clamp(0.0, 1.0);
    let mut skip = false;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);

        let title_color = ui.visuals().strong_text_color().gamma_multiply(fade);
        ui.label(RichText::new("Bootcamp Tracker").size(40.0).strong().color(title_color));

        ui.add_space(8.0);

        let sub_color = ui.visuals().weak_text_color().gamma_multiply(fade);
        ui.label(
            RichText::new(format!("Welcome back, {display_name}"))
                .size(16.0)
                .color(sub_color),
        );

        ui.add_space(30.0);
        ui.label(
            RichText::new("Loading your dashboard...")
                .small()
                .color(sub_color),
        );

        ui.add_space(12.0);
        if ui.button(RichText::new("Skip").small()).clicked() {
            skip = true;
        }
    });

    // Repaint at the deadline (or sooner while the fade runs).
    let next = if fade < 1.0 {
        Duration::from_millis(16)
    } else {
        state.timer.remaining()
    };
    ui.ctx().request_repaint_after(next);

    if skip || state.timer.due() {
        return state.advance();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_reports_exactly_once() {
        let mut state = WelcomeScreen::new(3.0);
        assert!(state.advance());
        assert!(!state.advance());
        assert!(!state.advance());
    }

    #[test]
    fn test_skip_does_not_wait_for_the_timer() {
        // A long deadline: the timer cannot be due yet, but an explicit
        // skip still advances.
        let mut state = WelcomeScreen::new(30.0);
        assert!(!state.timer.due());
        assert!(state.advance());
        // A later timer fire cannot advance a second time.
        assert!(!state.advance());
    }
}
