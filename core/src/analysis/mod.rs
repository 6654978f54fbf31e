pub mod aggregate;
pub mod threat;

pub use aggregate::{AggregationReport, FrequencyRange, SignalAggregator};
pub use threat::{assess_threat, ThreatAssessment, RECOMMENDED_ACTIONS};
