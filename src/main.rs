// Scope Calendar
// Main entry point

use anyhow::{anyhow, Result};
use scope_calendar::services::header::HeaderFormatter;
use scope_calendar::services::settings::SettingsService;
use scope_calendar::ui_egui::ScopeCalendarApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Scope Calendar");

    let settings_service = SettingsService::new(SettingsService::default_path());
    let settings = settings_service.load_or_default();
    log::info!(
        "Loaded settings: locale={}, time_zone={}",
        settings.locale,
        settings.time_zone
    );

    let formatter = match HeaderFormatter::from_settings(&settings) {
        Ok(formatter) => formatter,
        Err(e) => {
            log::warn!("Invalid header settings: {}, using Korean defaults", e);
            HeaderFormatter::korean()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([390.0, 640.0])
            .with_min_inner_size([320.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Scope Calendar",
        options,
        Box::new(move |cc| Ok(Box::new(ScopeCalendarApp::new(cc, &settings, formatter)))),
    )
    .map_err(|e| anyhow!("Calendar window failed: {}", e))
}
