//! JLC2KiCad GUI - Main entry point
//!
//! Loads settings, initializes logging, and opens the conversion dialog.

use jlc_core::config::{default_config_path, default_logs_dir, ConfigManager};
use jlc_core::logging::{init_tracing_with_file, LogLevel};

mod app;
mod handlers;
mod icon;
mod pages;
mod theme;
mod widgets;

use app::App;

fn main() -> anyhow::Result<()> {
    let _log_guard = init_tracing_with_file(LogLevel::Info, &default_logs_dir());

    let config_path = default_config_path();
    let mut config_manager = ConfigManager::new(&config_path);
    if let Err(e) = config_manager.load_or_create() {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
    }

    tracing::info!("JLC2KiCad GUI starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", jlc_core::version());

    let settings = config_manager.settings().clone();

    iced::application(
        move || App::new(config_path.clone(), settings.clone()),
        App::update,
        App::view,
    )
    .title(app::TITLE)
    .window(iced::window::Settings {
        size: theme::WINDOW_SIZE.into(),
        icon: icon::app_icon(),
        ..Default::default()
    })
    .run()?;

    tracing::info!("JLC2KiCad GUI exiting");
    Ok(())
}
