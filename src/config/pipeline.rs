use super::traits::ConfigSection;
use crate::error::StockcastError;
use serde::{Deserialize, Serialize};

/// Settings for one validate → prepare → fit run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub test_fraction: f64,
    pub seed: u64,
    pub min_usable_rows: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 42,
            min_usable_rows: 2,
        }
    }
}

impl ConfigSection for PipelineConfig {
    fn validate(&self) -> Result<(), StockcastError> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(StockcastError::Configuration(
                "Test fraction must be between 0 and 1".to_string()
            ));
        }
        if self.min_usable_rows < 2 {
            return Err(StockcastError::Configuration(
                "At least 2 usable rows are needed to split and fit".to_string()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_fraction() {
        for fraction in [0.0, 1.0, -0.5, f64::NAN] {
            let config = PipelineConfig { test_fraction: fraction, ..Default::default() };
            assert!(config.validate().is_err(), "fraction {} accepted", fraction);
        }
    }
}
