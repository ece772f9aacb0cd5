use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockcastError {
    #[error("File must contain 'Date' and 'Close' columns (missing: {})", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("Cannot parse date '{value}' at row {row}")]
    DateParse { row: usize, value: String },

    #[error("Cannot parse close price '{value}' at row {row}")]
    CloseParse { row: usize, value: String },

    #[error("Not enough usable rows: {usable} after cleaning, at least {required} required")]
    EmptySeries { usable: usize, required: usize },

    #[error("Model fit failed: {0}")]
    Fit(String),

    #[error("Invalid prediction input {0}: previous close must be a non-negative number")]
    InvalidPredictionInput(f64),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Config error: {0}")]
    Config(#[from] ::config::ConfigError),
}

/// Coarse classification used by the UI to title error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingColumns,
    DateParse,
    CloseParse,
    EmptySeries,
    Fit,
    InvalidPredictionInput,
    Internal,
}

impl ErrorKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::MissingColumns => "Missing columns",
            Self::DateParse => "Invalid date",
            Self::CloseParse => "Invalid close price",
            Self::EmptySeries => "Not enough data",
            Self::Fit => "Model fit failed",
            Self::InvalidPredictionInput => "Invalid input",
            Self::Internal => "Something went wrong",
        }
    }
}

impl StockcastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingColumns { .. } => ErrorKind::MissingColumns,
            Self::DateParse { .. } => ErrorKind::DateParse,
            Self::CloseParse { .. } => ErrorKind::CloseParse,
            Self::EmptySeries { .. } => ErrorKind::EmptySeries,
            Self::Fit(_) => ErrorKind::Fit,
            Self::InvalidPredictionInput(_) => ErrorKind::InvalidPredictionInput,
            Self::Configuration(_) | Self::Io(_) | Self::Polars(_) | Self::Config(_) => {
                ErrorKind::Internal
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StockcastError>;
