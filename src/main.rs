mod app;
mod config;
mod data;
mod regression;
mod state;
mod ui;

use std::path::PathBuf;

use app::StudyScoreApp;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::from_env().unwrap_or_else(|e| {
        log::error!("Ignoring configuration: {e:#}");
        Config::default()
    });

    let mut state = AppState::new(config);
    let data_file = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| state.config.data_file.clone());
    if let Some(path) = data_file {
        if let Err(e) = state.load_path(&path) {
            log::error!("Failed to load {}: {e:#}", path.display());
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Study Hours Predictor",
        options,
        Box::new(|_cc| Ok(Box::new(StudyScoreApp::new(state)))),
    )
}
