pub mod regression;

pub use regression::RegressionMetrics;
