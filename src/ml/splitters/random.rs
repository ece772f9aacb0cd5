use super::base::{DataSplitter, TrainTestSplit};
use crate::error::StockcastError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffled row split that ignores chronology.
///
/// The test side takes `ceil(test_fraction * n)` rows from the front of a
/// seeded permutation; training takes the rest.
pub struct RandomSplitter {
    test_fraction: f64,
    seed: u64,
}

impl RandomSplitter {
    pub fn new(test_fraction: f64, seed: u64) -> Self {
        Self { test_fraction, seed }
    }

    pub fn test_size(&self, n_rows: usize) -> usize {
        ((n_rows as f64) * self.test_fraction).ceil() as usize
    }
}

impl DataSplitter for RandomSplitter {
    fn split(&self, n_rows: usize) -> Result<TrainTestSplit, StockcastError> {
        let test_size = self.test_size(n_rows).min(n_rows);
        let train_size = n_rows - test_size;

        if train_size == 0 || test_size == 0 {
            return Err(StockcastError::Fit(format!(
                "Invalid split: {} rows give {} train / {} test",
                n_rows, train_size, test_size
            )));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut indices: Vec<usize> = (0..n_rows).collect();
        indices.shuffle(&mut rng);

        let train = indices.split_off(test_size);
        Ok(TrainTestSplit { train, test: indices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sizes() {
        let splitter = RandomSplitter::new(0.2, 42);
        let split = splitter.split(10).unwrap();
        assert_eq!(split.test.len(), 2);
        assert_eq!(split.train.len(), 8);

        let split = splitter.split(4).unwrap();
        assert_eq!(split.test.len(), 1);
        assert_eq!(split.train.len(), 3);
    }

    #[test]
    fn test_split_is_disjoint_and_complete() {
        let split = RandomSplitter::new(0.2, 42).split(57).unwrap();
        let mut all: Vec<usize> = split.train.iter().chain(split.test.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..57).collect::<Vec<_>>());
    }

    #[test]
    fn test_split_is_reproducible() {
        let a = RandomSplitter::new(0.2, 42).split(100).unwrap();
        let b = RandomSplitter::new(0.2, 42).split(100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_too_small() {
        let result = RandomSplitter::new(0.2, 42).split(1);
        assert!(matches!(result, Err(StockcastError::Fit(_))));
        let result = RandomSplitter::new(0.2, 42).split(0);
        assert!(matches!(result, Err(StockcastError::Fit(_))));
    }

    #[test]
    fn test_partition() {
        let split = TrainTestSplit { train: vec![2, 0], test: vec![1] };
        let (train, test) = split.partition(&[10.0, 11.0, 12.0]);
        assert_eq!(train, vec![12.0, 10.0]);
        assert_eq!(test, vec![11.0]);
    }
}
