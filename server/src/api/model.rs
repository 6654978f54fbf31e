use radarcore::prelude::{SignalRecord, ThreatAssessment};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Cosmetic ambient readings attached to a single observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalConditions {
    pub temperature: f64,
    pub humidity: f64,
    pub interference: f64,
}

impl EnvironmentalConditions {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self {
            temperature: rng.gen_range(20.0..30.0),
            humidity: rng.gen_range(0.0..100.0),
            interference: rng.gen_range(0.0..50.0),
        }
    }
}

/// Envelope returned by the single-observation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalObservation {
    pub signal: SignalRecord,
    pub threat_assessment: ThreatAssessment,
    pub environmental_conditions: EnvironmentalConditions,
}
