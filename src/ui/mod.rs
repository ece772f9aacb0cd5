mod app;
mod panels;
mod state;
mod widgets;
mod services;

pub use app::StockCastApp;
pub use state::{AppState, ErrorDisplay, PredictionDisplay};
pub use services::PipelineRunner;
