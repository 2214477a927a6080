use eframe::egui::{self, Color32, RichText, Ui};

use crate::regression::RegressionError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – model summary and prediction
// ---------------------------------------------------------------------------

/// Render the left panel: fitted coefficients, fit quality, prediction box.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Study Hours Predictor");
    ui.label("Predict your score based on study hours");
    ui.separator();

    let Some(model_result) = state.model else {
        ui.label("No dataset loaded.");
        return;
    };

    ui.strong("Model");
    egui::Grid::new("model_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            match model_result {
                Ok(model) => {
                    ui.label("Slope");
                    ui.label(format!("{:.4}", model.slope()));
                    ui.end_row();
                    ui.label("Intercept");
                    ui.label(format!("{:.4}", model.intercept()));
                    ui.end_row();
                }
                Err(e) => {
                    ui.label("Fit");
                    unavailable(ui, e);
                    ui.end_row();
                }
            }

            if let Some(statistics) = state.statistics {
                match statistics {
                    Ok(stats) => {
                        ui.label("R²");
                        ui.label(format!("{:.4}", stats.r_squared));
                        ui.end_row();
                        ui.label("MSE");
                        ui.label(format!("{:.4}", stats.mse));
                        ui.end_row();
                    }
                    Err(e) => {
                        ui.label("R² / MSE");
                        unavailable(ui, e);
                        ui.end_row();
                    }
                }
            }
        });

    ui.add_space(8.0);
    ui.separator();

    // ---- Prediction ----
    ui.strong("Predict");
    ui.horizontal(|ui: &mut Ui| {
        let input = ui.add(
            egui::TextEdit::singleline(&mut state.hours_input)
                .hint_text("Enter study hours")
                .desired_width(120.0),
        );
        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Predict").clicked() || submitted {
            state.predict_from_input();
        }
    });

    if let Some(prediction) = &state.prediction {
        ui.label(
            RichText::new(format!("Predicted Score: {:.2}", prediction.output))
                .strong()
                .size(16.0),
        );
    }
}

fn unavailable(ui: &mut Ui, error: RegressionError) {
    ui.label(RichText::new("not available").italics())
        .on_hover_text(error.to_string());
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(samples) = &state.samples {
            ui.label(format!(
                "{} samples loaded, {} rows rejected",
                samples.len(),
                state.rejected_rows
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open study data")
        .add_filter("Supported files", &["csv", "tsv", "txt", "json"])
        .add_filter("CSV", &["csv", "txt"])
        .add_filter("TSV", &["tsv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match state.load_path(&path) {
            Ok(()) => {
                log::info!(
                    "Loaded {} samples from {}",
                    state.samples.as_ref().map_or(0, |s| s.len()),
                    path.display()
                );
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
