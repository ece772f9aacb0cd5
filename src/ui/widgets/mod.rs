pub mod data_selector;
pub mod data_preview;
pub mod metrics_card;
pub mod prediction_form;
pub mod scatter_plot;

pub use data_selector::DataSelector;
pub use data_preview::DataPreviewGrid;
pub use metrics_card::MetricsCard;
pub use prediction_form::PredictionForm;
pub use scatter_plot::ScatterPlot;
