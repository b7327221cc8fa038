// Rust Pickers demo
// Main entry point

use anyhow::Result;
use rust_pickers::services::settings::{load_settings_or_default, SettingsService};
use rust_pickers::ui_egui::PickerDemoApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Pickers demo");

    let service = SettingsService::from_default_location();
    let settings = load_settings_or_default(service.as_ref());
    let app = PickerDemoApp::new(settings);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Rust Pickers")
            .with_inner_size([420.0, 360.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Pickers",
        native_options,
        Box::new(move |cc| {
            app.theme().apply_to_context(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to launch the picker demo: {err}"))?;

    Ok(())
}
