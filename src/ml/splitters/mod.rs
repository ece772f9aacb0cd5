pub mod base;
pub mod random;

pub use base::{DataSplitter, TrainTestSplit};
pub use random::RandomSplitter;
