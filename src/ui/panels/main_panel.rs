use crate::ui::state::AppState;
use crate::ui::widgets::{DataPreviewGrid, MetricsCard, ScatterPlot};

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Next Close Predictor");

        ui.separator();

        if let Some(error) = &state.error {
            ui.colored_label(
                egui::Color32::from_rgb(200, 60, 60),
                format!("{}: {}", error.kind.title(), error.message),
            );
        }
        ui.label(&state.status_message);

        ui.separator();

        let Some(run) = &state.run else {
            ui.centered_and_justified(|ui| {
                ui.label("No model yet. Select a CSV file to start.");
            });
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            if let Some(preview) = &state.preview {
                ui.heading("Recent Data Preview");
                DataPreviewGrid::show(ui, preview);
                ui.separator();
            }

            ui.heading("Model Performance");
            MetricsCard::show(ui, &run.report, &state.display);
            ui.label(format!(
                "Close ≈ {:.4} × PrevClose + {:.4}",
                run.model.slope, run.model.intercept
            ));

            ui.separator();

            ui.heading("Actual vs Predicted Close Price");
            ScatterPlot::show(ui, &run.report);
        });
    }
}
