use crate::config::{AppConfig, DisplayConfig, PipelineConfig};
use crate::data::DataPreview;
use crate::error::{ErrorKind, StockcastError};
use crate::pipeline::{PipelineRun, PredictionInput};
use std::path::PathBuf;

/// Central application state for the UI
pub struct AppState {
    // Data
    pub data_file_path: Option<PathBuf>,

    // Settings applied to the next run
    pub config_path: Option<PathBuf>,
    pub pipeline: PipelineConfig,
    pub display: DisplayConfig,

    // Latest run; replaced wholesale on every upload
    pub run: Option<PipelineRun>,
    pub preview: Option<DataPreview>,
    pub error: Option<ErrorDisplay>,

    // Prediction form
    pub prediction_input: f64,
    pub prediction: Option<PredictionDisplay>,

    pub status_message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDisplay {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&StockcastError> for ErrorDisplay {
    fn from(err: &StockcastError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionDisplay {
    Value(f64),
    Rejected(ErrorDisplay),
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            data_file_path: None,
            config_path: None,
            pipeline: config.pipeline,
            display: config.display,
            run: None,
            preview: None,
            error: None,
            prediction_input: 0.0,
            prediction: None,
            status_message: "Upload a CSV file with 'Date' and 'Close' columns".to_string(),
        }
    }

    /// Store the outcome of a fresh run. A failure clears the previous run.
    pub fn apply_run(
        &mut self,
        path: PathBuf,
        outcome: Result<(PipelineRun, DataPreview), StockcastError>,
    ) {
        self.data_file_path = Some(path);
        self.prediction = None;

        match outcome {
            Ok((run, preview)) => {
                self.prediction_input = run.latest_close().unwrap_or(0.0);
                self.status_message = format!(
                    "Model trained on {} rows, evaluated on {}",
                    run.report.train_size, run.report.test_size
                );
                self.run = Some(run);
                self.preview = Some(preview);
                self.error = None;
            }
            Err(err) => {
                log::error!("Pipeline run failed: {}", err);
                self.run = None;
                self.preview = None;
                self.error = Some(ErrorDisplay::from(&err));
                self.status_message = "Fix the file and upload it again".to_string();
            }
        }
    }

    /// Predict from the form value; negative input is rejected, not clamped.
    pub fn predict(&mut self) {
        let Some(run) = &self.run else {
            return;
        };
        self.prediction = Some(match PredictionInput::new(self.prediction_input) {
            Ok(input) => PredictionDisplay::Value(run.predict(input)),
            Err(err) => PredictionDisplay::Rejected(ErrorDisplay::from(&err)),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::PricePredictionPipeline;

    const CSV: &str = "Date,Close\n\
        2024-01-01,100\n2024-01-02,102\n2024-01-03,101\n2024-01-04,103\n\
        2024-01-05,104\n2024-01-06,106\n2024-01-07,105\n2024-01-08,107\n";

    fn outcome(csv: &str) -> Result<(PipelineRun, DataPreview), StockcastError> {
        let run = PricePredictionPipeline::default().run(csv.as_bytes())?;
        Ok((run, DataPreview::default()))
    }

    #[test]
    fn test_successful_run_sets_default_input() {
        let mut state = AppState::default();
        state.apply_run(PathBuf::from("prices.csv"), outcome(CSV));
        assert!(state.run.is_some());
        assert!(state.error.is_none());
        assert_eq!(state.prediction_input, 107.0);
    }

    #[test]
    fn test_failed_run_clears_previous_run() {
        let mut state = AppState::default();
        state.apply_run(PathBuf::from("prices.csv"), outcome(CSV));
        state.predict();
        assert!(state.prediction.is_some());

        state.apply_run(PathBuf::from("bad.csv"), outcome("Day,Close\n2024-01-01,1\n"));
        assert!(state.run.is_none());
        assert!(state.prediction.is_none());
        assert_eq!(state.error.as_ref().map(|e| e.kind), Some(ErrorKind::MissingColumns));
    }

    #[test]
    fn test_negative_prediction_input_is_rejected() {
        let mut state = AppState::default();
        state.apply_run(PathBuf::from("prices.csv"), outcome(CSV));
        state.prediction_input = -5.0;
        state.predict();
        match &state.prediction {
            Some(PredictionDisplay::Rejected(err)) => {
                assert_eq!(err.kind, ErrorKind::InvalidPredictionInput)
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(state.prediction_input, -5.0);
    }

    #[test]
    fn test_predict_without_run_does_nothing() {
        let mut state = AppState::default();
        state.predict();
        assert!(state.prediction.is_none());
    }
}
