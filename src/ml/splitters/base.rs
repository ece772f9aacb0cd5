use crate::error::StockcastError;

/// Disjoint row indices for fitting and for evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTestSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

impl TrainTestSplit {
    /// Gather `values` at the train indices, then at the test indices
    pub fn partition<T: Copy>(&self, values: &[T]) -> (Vec<T>, Vec<T>) {
        let pick = |idx: &[usize]| idx.iter().map(|&i| values[i]).collect::<Vec<T>>();
        (pick(&self.train), pick(&self.test))
    }
}

pub trait DataSplitter: Send + Sync {
    /// Partition `n_rows` row indices into train and test
    fn split(&self, n_rows: usize) -> Result<TrainTestSplit, StockcastError>;
}
