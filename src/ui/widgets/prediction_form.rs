use crate::ui::state::{AppState, PredictionDisplay};

pub struct PredictionForm;

impl PredictionForm {
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        if state.run.is_none() {
            ui.label("Upload data to enable predictions");
            return;
        }

        ui.label(format!(
            "Enter Previous Day's Closing Price ({})",
            state.display.currency_symbol
        ));

        // No range clamp: out-of-range input is rejected on submit
        let response = ui.add(
            egui::DragValue::new(&mut state.prediction_input)
                .prefix(state.display.currency_symbol.as_str())
                .speed(0.1)
                .fixed_decimals(state.display.price_decimals),
        );
        if response.changed() {
            state.prediction = None;
        }

        ui.add_space(5.0);

        if ui.button("Predict Next Price").clicked() {
            state.predict();
        }

        match &state.prediction {
            Some(PredictionDisplay::Value(value)) => {
                ui.colored_label(
                    egui::Color32::from_rgb(40, 160, 80),
                    format!("Predicted Next Close Price: {}", state.display.format_price(*value)),
                );
            }
            Some(PredictionDisplay::Rejected(err)) => {
                ui.colored_label(
                    egui::Color32::from_rgb(200, 60, 60),
                    format!("{}: {}", err.kind.title(), err.message),
                );
            }
            None => {}
        }
    }
}
