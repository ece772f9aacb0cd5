use super::input::PredictionInput;
use crate::config::PipelineConfig;
use crate::data::{CsvConnector, DataValidator};
use crate::error::Result;
use crate::ml::{
    DataSplitter, FeatureEngineer, FittedModel, LinearRegression, PreparedSeries,
    RandomSplitter, RegressionMetrics,
};
use crate::types::{EvaluationReport, RawSeries};
use polars::prelude::{DataFrame, IdxCa, IdxSize, NewChunkedArray};

/// Everything one successful run produces. Never shared between uploads.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    /// The uploaded table as read, before cleaning
    pub source: DataFrame,
    /// Records in the upload before cleaning
    pub source_records: usize,
    pub prepared: PreparedSeries,
    pub model: FittedModel,
    pub report: EvaluationReport,
}

impl PipelineRun {
    pub fn predict(&self, input: PredictionInput) -> f64 {
        PricePredictionPipeline::predict_next(&self.model, input.value())
    }

    /// Default for the prediction form
    pub fn latest_close(&self) -> Option<f64> {
        self.prepared.latest_close()
    }

    /// Last `n` prepared rows with every uploaded column. `Date` is
    /// normalised, `Close` holds the filled value and `PrevClose` is appended.
    pub fn recent_frame(&self, n: usize) -> Result<DataFrame> {
        let start = self.prepared.len().saturating_sub(n);
        let indices: Vec<IdxSize> = self.prepared.rows[start..]
            .iter()
            .map(|r| (r.source_row - 1) as IdxSize)
            .collect();

        let mut frame = self
            .source
            .take(&IdxCa::from_vec("source_row".into(), indices))?;
        for column in self.prepared.tail_frame(n)?.get_columns() {
            frame.with_column(column.clone())?;
        }
        Ok(frame)
    }
}

/// Stateless driver for one upload: holds settings only.
pub struct PricePredictionPipeline {
    config: PipelineConfig,
}

impl Default for PricePredictionPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl PricePredictionPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Unvalidated → Validated
    pub fn validate(&self, table: &DataFrame) -> Result<RawSeries> {
        let series = DataValidator::validate(table)?;
        log::info!("Validated {} records", series.len());
        Ok(series)
    }

    /// Validated → Prepared
    pub fn prepare(&self, raw: RawSeries) -> Result<PreparedSeries> {
        let prepared = FeatureEngineer::new(self.config.min_usable_rows).prepare(raw)?;
        log::info!("Prepared {} lag rows", prepared.len());
        Ok(prepared)
    }

    /// Prepared → Fitted, with metrics on the held-out rows
    pub fn fit_and_evaluate(
        &self,
        rows: &PreparedSeries,
        seed: u64,
    ) -> Result<(FittedModel, EvaluationReport)> {
        let split = RandomSplitter::new(self.config.test_fraction, seed).split(rows.len())?;

        let (x_train, x_test) = split.partition(&rows.prev_closes());
        let (y_train, y_test) = split.partition(&rows.closes());

        let model = LinearRegression::fit(&x_train, &y_train)?;
        log::debug!(
            "Fitted close = {:.6} * prev_close + {:.6} on {} rows",
            model.slope,
            model.intercept,
            x_train.len()
        );

        let y_pred = model.predict_many(&x_test);
        let metrics = RegressionMetrics::calculate(&y_test, &y_pred);
        log::info!(
            "Evaluated on {} rows: r2={:.4} rmse={:.2}",
            metrics.n_samples,
            metrics.r2,
            metrics.rmse
        );

        let report = EvaluationReport {
            r2: metrics.r2,
            rmse: metrics.rmse,
            train_size: x_train.len(),
            test_size: x_test.len(),
            test_actual: y_test,
            test_predicted: y_pred,
        };

        Ok((model, report))
    }

    /// `slope * prev_close + intercept`; callers reject negative input first
    pub fn predict_next(model: &FittedModel, prev_close: f64) -> f64 {
        model.predict(prev_close)
    }

    /// Validate, prepare, fit and evaluate a parsed table
    pub fn run_table(&self, table: &DataFrame) -> Result<PipelineRun> {
        let raw = self.validate(table)?;
        let source_records = raw.len();
        let prepared = self.prepare(raw)?;
        let (model, report) = self.fit_and_evaluate(&prepared, self.config.seed)?;
        Ok(PipelineRun {
            source: table.clone(),
            source_records,
            prepared,
            model,
            report,
        })
    }

    /// Full run over uploaded CSV bytes
    pub fn run(&self, csv_bytes: &[u8]) -> Result<PipelineRun> {
        let table = CsvConnector::read_bytes(csv_bytes)?;

        let null_report = DataValidator::check_nulls(&table);
        if !null_report.is_empty() {
            log::warn!("Null values detected: {:?}", null_report);
        }

        self.run_table(&table)
    }
}
