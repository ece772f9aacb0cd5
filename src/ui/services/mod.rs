pub mod config_bridge;
pub mod pipeline_runner;

pub use config_bridge::ConfigBridge;
pub use pipeline_runner::PipelineRunner;
