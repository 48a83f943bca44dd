//! GUI screens and application state.

pub mod app;
pub mod components;
pub mod congrats;
pub mod dashboard;
pub mod phase_page;
pub mod welcome;

pub use app::App;
