//! Synthetic telemetry core for the anti-radar demo platform.
//!
//! The modules mirror the demo backend's generator/aggregator contract
//! while providing typed records, a seedable entropy source, and an
//! injectable clock for deterministic testing.

pub mod analysis;
pub mod math;
pub mod prelude;
pub mod signal;
pub mod telemetry;

pub use prelude::{AnalysisError, AnalysisResult};
