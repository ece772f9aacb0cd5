use crate::error::StockcastError;

/// A previous-day close accepted for prediction: finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionInput(f64);

impl PredictionInput {
    pub fn new(prev_close: f64) -> Result<Self, StockcastError> {
        if !prev_close.is_finite() || prev_close < 0.0 {
            return Err(StockcastError::InvalidPredictionInput(prev_close));
        }
        Ok(Self(prev_close))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
