use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::data::model::SampleSet;
use crate::regression::Model;
use crate::state::AppState;

const SAMPLE_COLOR: Color32 = Color32::from_rgb(0x88, 0x84, 0xd8);
const FIT_COLOR: Color32 = Color32::from_rgb(0xff, 0x73, 0x00);

// ---------------------------------------------------------------------------
// Score plot (central panel)
// ---------------------------------------------------------------------------

/// Render observed samples, the fitted line and the last prediction.
pub fn score_plot(ui: &mut Ui, state: &AppState) {
    let samples = match &state.samples {
        Some(samples) => samples,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a file to view study data  (File → Open…)");
            });
            return;
        }
    };

    let model = state.model.and_then(Result::ok);

    Plot::new("score_plot")
        .legend(Legend::default())
        .x_axis_label("Study Hours")
        .y_axis_label("Score")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let observed: PlotPoints = samples.iter().map(|s| [s.x(), s.y()]).collect();
            plot_ui.points(
                Points::new(observed)
                    .name("Student Data")
                    .color(SAMPLE_COLOR)
                    .radius(3.0),
            );

            if let Some(ends) = model.and_then(|m| fit_line(&m, samples)) {
                let line: PlotPoints = ends.into_iter().collect();
                plot_ui.line(Line::new(line).name("Fit").color(FIT_COLOR).width(2.0));
            }

            if let Some(prediction) = &state.prediction {
                plot_ui.points(
                    Points::new(vec![[prediction.input, prediction.output]])
                        .name("Prediction")
                        .shape(MarkerShape::Diamond)
                        .color(FIT_COLOR)
                        .radius(6.0),
                );
            }
        });
}

/// End points of the fitted line across the observed hours.
fn fit_line(model: &Model, samples: &SampleSet) -> Option<[[f64; 2]; 2]> {
    let (lo, hi) = samples.x_range()?;
    Some([[lo, model.value_at(lo)], [hi, model.value_at(hi)]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regression::fit;

    #[test]
    fn fit_line_spans_observed_range() {
        let samples = SampleSet::from_pairs([(3.0, 70.0), (1.0, 50.0), (4.0, 80.0)]);
        let model = fit(&samples).unwrap();
        let [lo, hi] = fit_line(&model, &samples).unwrap();
        assert!((lo[0] - 1.0).abs() < 1e-12 && (lo[1] - 50.0).abs() < 1e-9);
        assert!((hi[0] - 4.0).abs() < 1e-12 && (hi[1] - 80.0).abs() < 1e-9);
    }

    #[test]
    fn no_fit_line_without_samples() {
        let model = Model::new(1.0, 0.0);
        assert!(fit_line(&model, &SampleSet::default()).is_none());
    }
}
