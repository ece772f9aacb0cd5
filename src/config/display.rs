use super::traits::ConfigSection;
use crate::error::StockcastError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub preview_rows: usize,
    pub r2_decimals: usize,
    pub price_decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            preview_rows: 5,
            r2_decimals: 4,
            price_decimals: 2,
        }
    }
}

impl DisplayConfig {
    /// Currency-prefixed price, e.g. `₹102.50`
    pub fn format_price(&self, value: f64) -> String {
        format!("{}{:.*}", self.currency_symbol, self.price_decimals, value)
    }

    pub fn format_r2(&self, value: f64) -> String {
        if value.is_nan() {
            "n/a".to_string()
        } else {
            format!("{:.*}", self.r2_decimals, value)
        }
    }
}

impl ConfigSection for DisplayConfig {
    fn validate(&self) -> Result<(), StockcastError> {
        if self.preview_rows == 0 || self.preview_rows > 50 {
            return Err(StockcastError::Configuration(
                "Preview rows must be between 1 and 50".to_string()
            ));
        }
        if self.r2_decimals > 10 || self.price_decimals > 10 {
            return Err(StockcastError::Configuration(
                "At most 10 decimals can be displayed".to_string()
            ));
        }
        Ok(())
    }
}
