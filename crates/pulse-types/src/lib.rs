pub mod explanation;
pub mod metrics;
pub mod severity;

pub use explanation::{Contribution, Explanation, RootCause};
pub use metrics::{Feature, Metrics, SensorEvent};
pub use severity::{AggregateWindow, SeverityLevel};
