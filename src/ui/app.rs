//! Screen coordinator: owns the current screen and routes navigation
//! intents returned by the screen modules.

use std::collections::HashSet;

use chrono::{DateTime, Local};
use eframe::egui;

use crate::config::AppConfig;
use crate::curriculum::{self, ModuleId};

use super::congrats::{self, CongratsScreen};
use super::welcome::{self, WelcomeScreen};
use super::{dashboard, phase_page};

/// Currently mounted screen. Per-screen animation state lives inside the
/// variant, so a screen switch drops it and cancels any pending timer.
pub enum Screen {
    Welcome(WelcomeScreen),
    Dashboard,
    Phase(ModuleId),
    Congrats(CongratsScreen),
}

/// Severity of an activity log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
}

/// One line in the dashboard's recent-activity feed.
pub struct ActivityEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

/// Screen transition requested by the frame just rendered.
enum Transition {
    None,
    ToDashboard,
    OpenModule(ModuleId),
    Complete(ModuleId),
}

/// Main application state.
pub struct App {
    config: AppConfig,
    screen: Screen,
    completed: HashSet<ModuleId>,
    activity: Vec<ActivityEntry>,
}

impl App {
    pub fn new(config: AppConfig, skip_welcome: bool) -> Self {
        let screen = if skip_welcome {
            Screen::Dashboard
        } else {
            Screen::Welcome(WelcomeScreen::new(config.timing.welcome_secs))
        };

        let mut app = Self {
            config,
            screen,
            completed: HashSet::new(),
            activity: Vec::new(),
        };
        app.log(LogLevel::Info, "Session started".to_string());
        app
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_completed(&self, module: ModuleId) -> bool {
        self.completed.contains(&module)
    }

    fn log(&mut self, level: LogLevel, message: String) {
        self.activity.push(ActivityEntry {
            timestamp: Local::now(),
            level,
            message,
        });
    }

    /// Route a dashboard click on a module identifier to its phase page.
    pub fn open_module(&mut self, module: ModuleId) {
        let phase = curriculum::phase_for(module);
        tracing::info!("Opening phase {} ({})", phase.number, module);
        self.log(LogLevel::Info, format!("Opened Phase {}: {}", phase.number, phase.title));
        self.screen = Screen::Phase(module);
    }

    /// Mark a module complete and mount the congratulations screen.
    pub fn complete_module(&mut self, module: ModuleId) {
        let phase = curriculum::phase_for(module);
        self.completed.insert(module);
        tracing::info!("Completed phase {} ({})", phase.number, module);
        self.log(
            LogLevel::Success,
            format!("Completed Phase {}: {}", phase.number, phase.title),
        );
        self.screen = Screen::Congrats(CongratsScreen::new(
            module,
            self.config.effects.particle_count,
            self.config.timing.reveal_offsets_secs,
        ));
    }

    /// Return to the dashboard, dropping the current screen's state.
    pub fn go_to_dashboard(&mut self) {
        self.screen = Screen::Dashboard;
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::None => {}
            Transition::ToDashboard => self.go_to_dashboard(),
            Transition::OpenModule(module) => self.open_module(module),
            Transition::Complete(module) => self.complete_module(module),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let transition = egui::CentralPanel::default()
            .show(ctx, |ui| match &mut self.screen {
                Screen::Welcome(state) => {
                    if welcome::show(state, &self.config.learner.display_name, ui) {
                        Transition::ToDashboard
                    } else {
                        Transition::None
                    }
                }
                Screen::Dashboard => match dashboard::show(&self.completed, &self.activity, ui) {
                    Some(module) => Transition::OpenModule(module),
                    None => Transition::None,
                },
                Screen::Phase(module) => {
                    let module = *module;
                    let phase = curriculum::phase_for(module);
                    match phase_page::show(phase, self.completed.contains(&module), ui) {
                        phase_page::Action::None => Transition::None,
                        phase_page::Action::GoBack => Transition::ToDashboard,
                        phase_page::Action::Complete => Transition::Complete(module),
                    }
                }
                Screen::Congrats(state) => {
                    if congrats::show(state, &self.config.learner.display_name, ui) {
                        Transition::ToDashboard
                    } else {
                        Transition::None
                    }
                }
            })
            .inner;

        self.apply(transition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(AppConfig::default(), true)
    }

    fn module(s: &str) -> ModuleId {
        ModuleId::parse(s).expect("valid module id")
    }

    #[test]
    fn test_starts_on_welcome_unless_skipped() {
        let app = App::new(AppConfig::default(), false);
        assert!(matches!(app.screen(), Screen::Welcome(_)));

        let app = App::new(AppConfig::default(), true);
        assert!(matches!(app.screen(), Screen::Dashboard));
    }

    #[test]
    fn test_dashboard_click_routes_to_phase_page() {
        let mut app = app();
        let id = module("module-7");

        app.open_module(id);

        match app.screen() {
            Screen::Phase(m) => {
                assert_eq!(*m, id);
                assert_eq!(curriculum::phase_for(*m).number, 3);
            }
            _ => panic!("expected phase screen"),
        }
    }

    #[test]
    fn test_complete_module_mounts_congrats_and_marks_done() {
        let mut app = app();
        let id = module("module-10");

        app.open_module(id);
        app.complete_module(id);

        assert!(app.is_completed(id));
        match app.screen() {
            Screen::Congrats(state) => assert_eq!(state.module(), id),
            _ => panic!("expected congratulations screen"),
        }
    }

    #[test]
    fn test_leaving_congrats_returns_to_dashboard() {
        let mut app = app();
        let id = module("module-5");

        app.complete_module(id);
        app.go_to_dashboard();

        assert!(matches!(app.screen(), Screen::Dashboard));
        // Completion survives the screen switch for this session.
        assert!(app.is_completed(id));
    }

    #[test]
    fn test_remounting_congrats_regenerates_particles() {
        let mut app = app();
        let id = module("module-11");

        app.complete_module(id);
        app.go_to_dashboard();
        app.complete_module(id);

        assert!(matches!(app.screen(), Screen::Congrats(_)));
        assert!(app.is_completed(id));
    }

    #[test]
    fn test_activity_log_records_completion() {
        let mut app = app();
        let id = module("module-7");

        app.complete_module(id);

        let last = app.activity.last().expect("activity entry");
        assert_eq!(last.level, LogLevel::Success);
        assert!(last.message.contains("Phase 3"));
    }
}
