pub mod config;
pub mod curriculum;
pub mod effects;
pub mod error;
pub mod ui;

pub use error::{AppError, Result};
