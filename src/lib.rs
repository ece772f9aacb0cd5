pub mod config;
pub mod data;
pub mod error;
pub mod ml;
pub mod pipeline;
pub mod types;
pub mod ui;

pub use error::{ErrorKind, Result, StockcastError};
pub use pipeline::{PipelineRun, PredictionInput, PricePredictionPipeline};
