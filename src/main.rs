//! Bootcamp Tracker - Desktop learning dashboard for curriculum phases.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use bootcamp_tracker as app;

use app::AppError;
use app::config::{AppConfig, ConfigLoadResult};
use app::ui::App;

/// Desktop learning dashboard for bootcamp curriculum phases.
#[derive(Parser)]
#[command(name = "bootcamp-tracker")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Start directly on the phase dashboard
    #[arg(long)]
    skip_welcome: bool,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; hold the file writer guard for the app lifetime.
    let _log_guard = match init_logging(cli.dev) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Logging setup failed, continuing without log file: {e:#}");
            None
        }
    };

    tracing::info!("Bootcamp Tracker starting...");

    // Determine config path based on mode
    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };
    tracing::info!("Config path: {:?}", config_path);

    let config = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            config
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, writing starter file and using defaults");
            let config = AppConfig::default();
            if let Err(e) = config.save(&config_path) {
                tracing::warn!("Could not write starter config: {}", e);
            }
            config
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid, falling back to defaults: {}", e);
            AppConfig::default()
        }
    };

    run_app(config, cli.skip_welcome)
}

/// Set up the tracing subscriber. Dev mode logs to stdout; normal mode
/// logs to a daily-rotated file under the platform data directory.
fn init_logging(dev: bool) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter =
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    if dev {
        tracing_subscriber::fmt().with_env_filter(filter).init();
        return Ok(None);
    }

    let dir = log_dir().context("resolving log directory")?;
    std::fs::create_dir_all(&dir).with_context(|| format!("creating log directory {dir:?}"))?;

    let appender = tracing_appender::rolling::daily(&dir, "bootcamp-tracker.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

/// Platform-local data directory for log files.
fn log_dir() -> app::Result<PathBuf> {
    directories::ProjectDirs::from("", "", "bootcamp-tracker")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .ok_or(AppError::NoLogDir)
}

/// Run the application.
fn run_app(config: AppConfig, skip_welcome: bool) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bootcamp Tracker")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bootcamp Tracker",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);

            // Phosphor icon glyphs used by the dashboard and phase pages.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(App::new(config, skip_welcome)))
        }),
    )
}
