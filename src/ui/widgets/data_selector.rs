use crate::ui::services::{ConfigBridge, PipelineRunner};
use crate::ui::state::AppState;
use std::path::PathBuf;

pub struct DataSelector;

impl DataSelector {
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            if ui.button("Select CSV File...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("CSV Files", &["csv"])
                    .pick_file()
                {
                    Self::run(state, path);
                }
            }

            let has_file = state.data_file_path.is_some();
            if ui.add_enabled(has_file, egui::Button::new("Re-run")).clicked() {
                if let Some(path) = state.data_file_path.clone() {
                    Self::run(state, path);
                }
            }
        });

        // Display current file info
        if let Some(path) = &state.data_file_path {
            ui.label(format!("File: {}", path.file_name().unwrap_or_default().to_string_lossy()));

            if let Some(run) = &state.run {
                ui.label(format!("Rows in file: {}", run.source_records));
                ui.label(format!("Usable rows: {}", run.prepared.len()));
            }
        } else {
            ui.label("No data loaded");
        }
    }

    /// Every upload (or re-run) starts from the raw file again. Invalid
    /// settings fail the run like a bad file does.
    pub(crate) fn run(state: &mut AppState, path: PathBuf) {
        let outcome = ConfigBridge::to_pipeline_config(state)
            .and_then(|pipeline| PipelineRunner::run_file(&path, &pipeline, &state.display));
        state.apply_run(path, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const CSV: &str = "Date,Close\n\
        2024-01-01,100\n2024-01-02,102\n2024-01-03,101\n2024-01-04,103\n\
        2024-01-05,104\n2024-01-06,106\n2024-01-07,105\n2024-01-08,107\n";

    #[test]
    fn test_invalid_settings_clear_previous_run() {
        let path = std::env::temp_dir().join(format!("stockcast_selector_{}.csv", std::process::id()));
        std::fs::write(&path, CSV).unwrap();

        let mut state = AppState::default();
        DataSelector::run(&mut state, path.clone());
        assert!(state.run.is_some());
        assert!(state.preview.is_some());

        state.pipeline.test_fraction = 0.0;
        DataSelector::run(&mut state, path.clone());
        assert!(state.run.is_none());
        assert!(state.preview.is_none());
        assert_eq!(state.error.as_ref().map(|e| e.kind), Some(ErrorKind::Internal));

        std::fs::remove_file(&path).ok();
    }
}
