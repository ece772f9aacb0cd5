use crate::ui::services::ConfigBridge;
use crate::ui::state::{AppState, ErrorDisplay};
use crate::ui::widgets::DataSelector;

pub struct LeftPanel;

impl LeftPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Data");
        ui.separator();

        ui.label("Upload a CSV file with 'Date' and 'Close' columns. The app will:");
        ui.label("• train a linear regression on the previous day's close");
        ui.label("• show model performance");
        ui.label("• predict the next day's close from a price you enter");

        ui.add_space(8.0);

        // 1. Data Selection Section
        DataSelector::show(ui, state);

        ui.separator();

        // 2. Pipeline Settings Section
        ui.collapsing("Pipeline Settings", |ui| {
            Self::show_pipeline_settings(ui, state);
        });
    }

    fn show_pipeline_settings(ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.label("Test Fraction:");
            ui.add(egui::DragValue::new(&mut state.pipeline.test_fraction)
                .speed(0.01)
                .range(0.05..=0.5)
                .fixed_decimals(2));
        });

        ui.horizontal(|ui| {
            ui.label("Split Seed:");
            ui.add(egui::DragValue::new(&mut state.pipeline.seed));
        });

        ui.small("Changes apply on the next upload or re-run");

        ui.add_space(5.0);

        if ui.add_enabled(state.config_path.is_some(), egui::Button::new("Save Settings")).clicked() {
            match ConfigBridge::save_settings(state) {
                Ok(()) => state.status_message = "Settings saved".to_string(),
                Err(e) => state.error = Some(ErrorDisplay::from(&e)),
            }
        }
    }
}
