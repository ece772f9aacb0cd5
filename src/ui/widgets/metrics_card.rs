use crate::config::DisplayConfig;
use crate::types::EvaluationReport;

pub struct MetricsCard;

impl MetricsCard {
    pub fn show(ui: &mut egui::Ui, report: &EvaluationReport, display: &DisplayConfig) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label("R² Score:");
                ui.strong(display.format_r2(report.r2));
            });
            ui.horizontal(|ui| {
                ui.label("RMSE:");
                ui.strong(display.format_price(report.rmse));
            });
            ui.horizontal(|ui| {
                ui.label("Train / Test rows:");
                ui.label(format!("{} / {}", report.train_size, report.test_size));
            });
            if report.r2.is_nan() {
                ui.small("R² needs at least two test rows");
            }
        });
    }
}
