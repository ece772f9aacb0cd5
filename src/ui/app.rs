use super::panels::{LeftPanel, MainPanel, RightPanel};
use super::state::AppState;
use crate::config::AppConfig;
use std::path::PathBuf;

pub struct StockCastApp {
    state: AppState,
    left_panel: LeftPanel,
    main_panel: MainPanel,
    right_panel: RightPanel,
}

impl Default for StockCastApp {
    fn default() -> Self {
        Self::with_config(AppConfig::default(), None)
    }
}

impl StockCastApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, config_path: Option<PathBuf>) -> Self {
        Self::with_config(config, config_path)
    }

    fn with_config(config: AppConfig, config_path: Option<PathBuf>) -> Self {
        let mut state = AppState::new(config);
        state.config_path = config_path;
        Self {
            state,
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
            right_panel: RightPanel::new(),
        }
    }
}

impl eframe::App for StockCastApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("📈 StockCast - Next Close Predictor");
            });
        });

        // Left Panel - Upload & Settings
        egui::SidePanel::left("left_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.left_panel.show(ui, &mut self.state);
                });
            });

        // Right Panel - Prediction
        egui::SidePanel::right("right_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.right_panel.show(ui, &mut self.state);
            });

        // Central Panel - Preview, Metrics, Plot
        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.show(ui, &mut self.state);
        });
    }
}
