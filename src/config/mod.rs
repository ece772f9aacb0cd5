pub mod traits;
pub mod pipeline;
pub mod display;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use pipeline::PipelineConfig;
pub use display::DisplayConfig;
pub use traits::ConfigSection;
