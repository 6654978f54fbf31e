/// Common error type for telemetry analysis.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("invalid signal count: {0}")]
    InvalidCount(i64),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

pub use crate::analysis::aggregate::{AggregationReport, FrequencyRange, SignalAggregator};
pub use crate::analysis::threat::{assess_threat, ThreatAssessment, RECOMMENDED_ACTIONS};
pub use crate::signal::generator::{Clock, SignalGenerator, SystemClock};
pub use crate::signal::record::{Classification, Coordinates, Modulation, SignalRecord};
