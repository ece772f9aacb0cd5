//! The validate → prepare → fit → predict lifecycle.
//!
//! Each stage consumes the previous stage's type, so a run cannot skip ahead:
//! `DataFrame` → [`RawSeries`](crate::types::RawSeries) →
//! [`PreparedSeries`](crate::ml::PreparedSeries) → [`PipelineRun`].

pub mod input;
pub mod orchestrator;

pub use input::PredictionInput;
pub use orchestrator::{PipelineRun, PricePredictionPipeline};
