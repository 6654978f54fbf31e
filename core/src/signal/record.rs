use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Modulation scheme attached to a synthetic emitter observation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Modulation {
    Pulse,
    FM,
    AM,
    FMCW,
    Chirp,
}

impl Modulation {
    pub const ALL: [Modulation; 5] = [
        Modulation::Pulse,
        Modulation::FM,
        Modulation::AM,
        Modulation::FMCW,
        Modulation::Chirp,
    ];
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Modulation::Pulse => "Pulse",
            Modulation::FM => "FM",
            Modulation::AM => "AM",
            Modulation::FMCW => "FMCW",
            Modulation::Chirp => "Chirp",
        };
        write!(f, "{}", name)
    }
}

/// Emitter classification assigned to a synthetic observation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Classification {
    #[serde(rename = "Fighter Jet")]
    FighterJet,
    #[serde(rename = "SAM Site")]
    SamSite,
    #[serde(rename = "UAV")]
    Uav,
    #[serde(rename = "Ground Radar")]
    GroundRadar,
}

impl Classification {
    pub const ALL: [Classification; 4] = [
        Classification::FighterJet,
        Classification::SamSite,
        Classification::Uav,
        Classification::GroundRadar,
    ];
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::FighterJet => "Fighter Jet",
            Classification::SamSite => "SAM Site",
            Classification::Uav => "UAV",
            Classification::GroundRadar => "Ground Radar",
        };
        write!(f, "{}", name)
    }
}

/// Geographic position of a synthetic emitter, altitude in integral feet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: u32,
}

/// One synthetic radar-signal observation. Immutable once produced;
/// every numeric field stays inside its declared range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignalRecord {
    /// MHz, in [2000, 3000).
    pub frequency: f64,
    /// Relative units, in [0, 100).
    pub amplitude: f64,
    /// Microseconds, in [500, 1500).
    pub pulse_repetition_interval: f64,
    pub modulation: Modulation,
    /// Microseconds, in [1, 21).
    pub pulse_width: f64,
    /// MHz, in [50, 150).
    pub bandwidth: f64,
    /// In [0, 100).
    pub threat_level: f64,
    /// dB, in [10, 40).
    pub signal_to_noise: f64,
    /// Hz, in [-500, 500).
    pub doppler: f64,
    pub classification: Classification,
    pub timestamp: DateTime<Utc>,
    pub coordinates: Coordinates,
}
