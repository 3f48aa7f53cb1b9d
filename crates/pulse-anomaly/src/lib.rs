pub mod aggregate;
pub mod attribution;
pub mod classifier;
pub mod engine;
pub mod error;
pub mod rootcause;
pub mod validate;

pub use aggregate::WindowAggregator;
pub use attribution::FeatureAttributor;
pub use classifier::SeverityClassifier;
pub use engine::AnomalyEngine;
pub use error::{AnomalyError, Result};
pub use rootcause::{causal_label, RootCauseMapper, NOMINAL_OPERATION};
pub use validate::{validate_event, validate_metrics};
