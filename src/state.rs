use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::data::extract::{extract_samples, rejected_count};
use crate::data::loader::load_file;
use crate::data::model::SampleSet;
use crate::regression::{self, FitStatistics, Model, Prediction, RegressionError};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    pub config: Config,

    /// Validated samples (None until a file is loaded).
    pub samples: Option<SampleSet>,

    /// Non-header rows dropped by the extractor in the last load.
    pub rejected_rows: usize,

    /// Fit result for `samples` (cached).
    pub model: Option<Result<Model, RegressionError>>,

    /// Goodness of fit for `model` on `samples`; None when the fit failed.
    pub statistics: Option<Result<FitStatistics, RegressionError>>,

    /// Text in the study-hours input box.
    pub hours_input: String,

    /// Last successful prediction.
    pub prediction: Option<Prediction>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Read a file and run the whole pipeline on it.
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let delimiter = self.config.delimiter_byte()?;
        let rows = load_file(path, delimiter)?;
        self.set_rows(&rows);
        Ok(())
    }

    /// Extract samples from tokenized rows and fit them.
    pub fn set_rows(&mut self, rows: &[Vec<String>]) {
        let options = self.config.extract_options();
        let samples = extract_samples(rows, &options);
        self.rejected_rows = rejected_count(rows, &options, &samples);
        self.set_samples(samples);
    }

    /// Fit and evaluate a new sample set, discarding any stale prediction.
    pub fn set_samples(&mut self, samples: SampleSet) {
        let model = regression::fit(&samples);
        self.statistics = model
            .as_ref()
            .ok()
            .map(|model| regression::evaluate(model, &samples));
        self.model = Some(model);
        self.samples = Some(samples);
        self.prediction = None;
        self.status_message = None;
    }

    /// Parse the hours input box and predict a score for it.
    pub fn predict_from_input(&mut self) {
        self.prediction = None;

        let model = match &self.model {
            Some(Ok(model)) => *model,
            Some(Err(e)) => {
                self.status_message = Some(format!("No model available: {e}"));
                return;
            }
            None => {
                self.status_message = Some("Load a dataset before predicting".into());
                return;
            }
        };

        let text = self.hours_input.trim();
        let hours = match text.parse::<f64>() {
            Ok(hours) => hours,
            Err(_) => {
                self.status_message = Some(format!("'{text}' is not a number of hours"));
                return;
            }
        };

        match regression::predict(&model, hours) {
            Ok(prediction) => {
                log::debug!("Predicted {:.2} for {hours} hours", prediction.output);
                self.prediction = Some(prediction);
                self.status_message = None;
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }
}
