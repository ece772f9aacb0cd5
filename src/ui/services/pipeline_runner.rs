use crate::config::{DisplayConfig, PipelineConfig};
use crate::data::{CsvConnector, DataPreview};
use crate::error::StockcastError;
use crate::pipeline::{PipelineRun, PricePredictionPipeline};
use std::path::Path;

pub struct PipelineRunner;

impl PipelineRunner {
    /// Read `path` and run the whole pipeline from scratch
    pub fn run_file(
        path: &Path,
        pipeline: &PipelineConfig,
        display: &DisplayConfig,
    ) -> Result<(PipelineRun, DataPreview), StockcastError> {
        log::info!("Running pipeline on {}", path.display());
        let bytes = std::fs::read(path)?;
        Self::run_bytes(&bytes, pipeline, display)
    }

    pub fn run_bytes(
        bytes: &[u8],
        pipeline: &PipelineConfig,
        display: &DisplayConfig,
    ) -> Result<(PipelineRun, DataPreview), StockcastError> {
        let run = PricePredictionPipeline::new(pipeline.clone()).run(bytes)?;

        let recent = run.recent_frame(display.preview_rows)?;
        let preview = CsvConnector::create_preview(&recent, display.price_decimals)?;

        Ok((run, preview))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_holds_most_recent_rows() {
        let csv = "Date,Close\n\
            2024-01-08,107\n2024-01-01,100\n2024-01-02,102\n2024-01-03,101\n\
            2024-01-04,103\n2024-01-05,104\n2024-01-06,106\n2024-01-07,105\n";
        let display = DisplayConfig { preview_rows: 3, ..Default::default() };

        let (_, preview) =
            PipelineRunner::run_bytes(csv.as_bytes(), &PipelineConfig::default(), &display).unwrap();

        assert_eq!(preview.columns, vec!["Date", "Close", "PrevClose"]);
        assert_eq!(preview.rows.len(), 3);
        assert_eq!(preview.rows[2], vec!["2024-01-08", "107.00", "105.00"]);
    }

    #[test]
    fn test_preview_carries_uploaded_columns() {
        let csv = "Date,Volume,Close\n\
            2024-01-01,10,100\n2024-01-02,20,102\n2024-01-03,30,101\n\
            2024-01-04,40,103\n2024-01-05,50,104\n2024-01-06,60,106\n";
        let display = DisplayConfig { preview_rows: 2, ..Default::default() };

        let (_, preview) =
            PipelineRunner::run_bytes(csv.as_bytes(), &PipelineConfig::default(), &display).unwrap();

        assert_eq!(preview.columns, vec!["Date", "Volume", "Close", "PrevClose"]);
        assert_eq!(preview.rows[1], vec!["2024-01-06", "60", "106.00", "104.00"]);
    }

    #[test]
    fn test_missing_file() {
        let result = PipelineRunner::run_file(
            Path::new("/nonexistent/stockcast/prices.csv"),
            &PipelineConfig::default(),
            &DisplayConfig::default(),
        );
        assert!(matches!(result, Err(StockcastError::Io(_))));
    }
}
