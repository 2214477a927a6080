/// Regression layer: least-squares fit, goodness of fit, prediction.
///
/// ```text
///   SampleSet
///       │
///       ▼
///   ┌─────────┐
///   │   fit    │  closed-form OLS → Model
///   └─────────┘
///       │
///       ▼
///   ┌──────────┐
///   │ evaluate  │  R², MSE → FitStatistics
///   │ predict   │  x → Prediction
///   └──────────┘
/// ```

pub mod error;
pub mod evaluate;
pub mod fit;
pub mod types;

pub use error::RegressionError;
pub use evaluate::{evaluate, predict};
pub use fit::fit;
pub use types::{FitStatistics, Model, Prediction};
