pub mod features;
pub mod metrics;
pub mod models;
pub mod splitters;

pub use features::{forward_fill, FeatureEngineer, PreparedSeries};
pub use metrics::RegressionMetrics;
pub use models::{FittedModel, LinearRegression};
pub use splitters::{DataSplitter, RandomSplitter, TrainTestSplit};
