use eframe::NativeOptions;
use std::path::PathBuf;
use stockcast::config::ConfigManager;
use stockcast::ui::StockCastApp;

/// Overrides the settings file location
const CONFIG_PATH_VAR: &str = "STOCKCAST_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "stockcast.toml";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = std::env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let manager = ConfigManager::new();
    manager.load_layered(Some(&config_path))?;
    let config = manager.get();
    log::info!("Starting with settings from {}", config_path.display());

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([900.0, 560.0])
            .with_title("StockCast - Next Close Predictor"),
        ..Default::default()
    };

    eframe::run_native(
        "StockCast",
        native_options,
        Box::new(move |cc| Ok(Box::new(StockCastApp::new(cc, config, Some(config_path))))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start UI: {}", e))
}
