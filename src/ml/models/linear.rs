//! Single-feature ordinary least squares.

use crate::error::StockcastError;
use serde::{Deserialize, Serialize};

/// `close ≈ slope * prev_close + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FittedModel {
    pub slope: f64,
    pub intercept: f64,
}

impl FittedModel {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn predict(&self, prev_close: f64) -> f64 {
        self.slope * prev_close + self.intercept
    }

    pub fn predict_many(&self, prev_closes: &[f64]) -> Vec<f64> {
        prev_closes.iter().map(|&x| self.predict(x)).collect()
    }
}

pub struct LinearRegression;

impl LinearRegression {
    /// Fit by the closed-form normal equations for one regressor:
    /// slope = Sxy / Sxx, intercept = ȳ - slope * x̄
    pub fn fit(x: &[f64], y: &[f64]) -> Result<FittedModel, StockcastError> {
        if x.len() != y.len() {
            return Err(StockcastError::Fit(format!(
                "Dimension mismatch: {} features, {} targets",
                x.len(),
                y.len()
            )));
        }
        if x.is_empty() {
            return Err(StockcastError::Fit("No training rows".to_string()));
        }
        if x.iter().all(|&v| v == x[0]) {
            return Err(StockcastError::Fit(
                "Previous close is constant across training rows".to_string(),
            ));
        }

        let n = x.len() as f64;
        let x_mean = x.iter().sum::<f64>() / n;
        let y_mean = y.iter().sum::<f64>() / n;

        let (sxx, sxy) = x.iter().zip(y).fold((0.0, 0.0), |(sxx, sxy), (&xi, &yi)| {
            let dx = xi - x_mean;
            (sxx + dx * dx, sxy + dx * (yi - y_mean))
        });

        if sxx <= 0.0 {
            return Err(StockcastError::Fit("Singular design: zero feature variance".to_string()));
        }

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;

        if !slope.is_finite() || !intercept.is_finite() {
            return Err(StockcastError::Fit(format!(
                "Non-finite coefficients (slope {}, intercept {})",
                slope, intercept
            )));
        }

        Ok(FittedModel { slope, intercept })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [3.0, 5.0, 7.0, 9.0];
        let model = LinearRegression::fit(&x, &y).unwrap();
        assert!((model.slope - 2.0).abs() < 1e-12);
        assert!((model.intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_least_squares_on_noisy_points() {
        // Mean x = 2, mean y = 2; Sxy = 1, Sxx = 2
        let x = [1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 2.0];
        let model = LinearRegression::fit(&x, &y).unwrap();
        assert!((model.slope - 0.5).abs() < 1e-12);
        assert!((model.intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_feature_is_fit_error() {
        let result = LinearRegression::fit(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(StockcastError::Fit(_))));
    }

    #[test]
    fn test_empty_and_mismatched() {
        assert!(LinearRegression::fit(&[], &[]).is_err());
        assert!(LinearRegression::fit(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn test_identity_prediction() {
        let model = FittedModel::new(1.0, 0.0);
        assert_eq!(model.predict(150.0), 150.0);
    }

    #[test]
    fn test_prediction_is_affine() {
        let model = FittedModel::new(0.97, 3.5);
        let (x1, x2) = (120.0, 180.25);
        let delta = model.predict(x2) - model.predict(x1);
        assert!((delta - model.slope * (x2 - x1)).abs() < 1e-9);
    }
}
