use crate::types::EvaluationReport;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

const PLOT_HEIGHT: f32 = 280.0;

/// Actual (x) vs predicted (y) close prices on the test rows
pub struct ScatterPlot;

impl ScatterPlot {
    pub fn show(ui: &mut egui::Ui, report: &EvaluationReport) {
        let points = scatter_series(report);
        let Some(reference) = reference_line(&points) else {
            ui.label("No test rows to plot");
            return;
        };

        Plot::new("actual_vs_predicted")
            .height(PLOT_HEIGHT)
            .x_axis_label("Actual Close Price")
            .y_axis_label("Predicted Close Price")
            .data_aspect(1.0)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Perfect prediction", PlotPoints::from(reference.to_vec()))
                        .color(egui::Color32::from_gray(140)),
                );
                plot_ui.points(
                    Points::new("Test rows", PlotPoints::from(points))
                        .radius(3.5)
                        .color(egui::Color32::from_rgb(70, 130, 220)),
                );
            });
    }
}

/// `[actual, predicted]` pairs, skipping non-finite values
fn scatter_series(report: &EvaluationReport) -> Vec<[f64; 2]> {
    report
        .scatter_points()
        .filter(|(a, p)| a.is_finite() && p.is_finite())
        .map(|(a, p)| [a, p])
        .collect()
}

/// Endpoints of the y = x line across every plotted value
fn reference_line(points: &[[f64; 2]]) -> Option<[[f64; 2]; 2]> {
    let (lo, hi) = points
        .iter()
        .flat_map(|p| p.iter().copied())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;
    Some([[lo, lo], [hi, hi]])
}
