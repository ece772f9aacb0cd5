use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One record of the uploaded series before date parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    /// 1-based data row in the source file (header excluded)
    pub row: usize,
    pub date: Option<String>,
    pub close: Option<f64>,
}

/// Validated input: `Date` and `Close` extracted in file order.
#[derive(Debug, Clone, Default)]
pub struct RawSeries {
    pub records: Vec<PriceRecord>,
}

impl RawSeries {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Lag-featurized row: yesterday's close next to today's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeaturizedRow {
    /// `PriceRecord::row` this lag row was built from
    pub source_row: usize,
    pub date: NaiveDateTime,
    pub prev_close: f64,
    pub close: f64,
}

/// Fit quality on the held-out partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Coefficient of determination; NaN when fewer than two test rows
    pub r2: f64,
    pub rmse: f64,
    pub train_size: usize,
    pub test_size: usize,
    pub test_actual: Vec<f64>,
    pub test_predicted: Vec<f64>,
}

impl EvaluationReport {
    /// (actual, predicted) pairs for the scatter comparison
    pub fn scatter_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.test_actual
            .iter()
            .copied()
            .zip(self.test_predicted.iter().copied())
    }
}
