use crate::ui::state::AppState;
use crate::ui::widgets::PredictionForm;

pub struct RightPanel;

impl RightPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Predict Next Closing Price");

        ui.separator();

        PredictionForm::show(ui, state);
    }
}
