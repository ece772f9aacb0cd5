//! Regression metrics for the held-out partition.

/// R² and RMSE for one set of predictions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionMetrics {
    pub r2: f64,
    pub rmse: f64,
    pub n_samples: usize,
}

impl RegressionMetrics {
    pub fn calculate(y_true: &[f64], y_pred: &[f64]) -> Self {
        Self {
            r2: Self::r_squared(y_true, y_pred),
            rmse: Self::root_mean_squared_error(y_true, y_pred),
            n_samples: y_true.len(),
        }
    }

    /// Mean Squared Error: (1/n) * Σ(y_true - y_pred)²
    pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> f64 {
        if y_true.is_empty() {
            return f64::NAN;
        }
        let n = y_true.len() as f64;
        y_true
            .iter()
            .zip(y_pred)
            .map(|(&t, &p)| (t - p).powi(2))
            .sum::<f64>()
            / n
    }

    pub fn root_mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> f64 {
        Self::mean_squared_error(y_true, y_pred).sqrt()
    }

    /// R² = 1 - SS_res / SS_tot
    ///
    /// Undefined (NaN) below two samples. A constant target scores 1.0 when
    /// predicted exactly and 0.0 otherwise.
    pub fn r_squared(y_true: &[f64], y_pred: &[f64]) -> f64 {
        if y_true.len() < 2 {
            return f64::NAN;
        }
        let y_mean = y_true.iter().sum::<f64>() / y_true.len() as f64;

        let ss_res: f64 = y_true
            .iter()
            .zip(y_pred)
            .map(|(&t, &p)| (t - p).powi(2))
            .sum();
        let ss_tot: f64 = y_true.iter().map(|&t| (t - y_mean).powi(2)).sum();

        if ss_tot == 0.0 {
            return if ss_res == 0.0 { 1.0 } else { 0.0 };
        }

        1.0 - ss_res / ss_tot
    }
}
