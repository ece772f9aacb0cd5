pub mod engineer;

pub use engineer::{forward_fill, FeatureEngineer, PreparedSeries};
