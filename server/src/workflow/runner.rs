use crate::workflow::config::ServerConfig;
use radarcore::prelude::{
    AggregationReport, SignalAggregator, SignalGenerator, SignalRecord, ThreatAssessment,
};
use radarcore::AnalysisResult;

/// One observation plus its derived threat picture.
pub struct Observation {
    pub signal: SignalRecord,
    pub threat: ThreatAssessment,
}

/// Per-request driver over the telemetry core. A fresh generator is
/// built for every call so requests share no state.
#[derive(Clone)]
pub struct Runner {
    config: ServerConfig,
}

impl Runner {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    fn generator(&self) -> SignalGenerator {
        match self.config.seed {
            Some(seed) => SignalGenerator::from_seed(seed),
            None => SignalGenerator::new(),
        }
    }

    pub fn observe(&self) -> Observation {
        let mut generator = self.generator();
        let signal = generator.generate();
        let threat = generator.assess(&signal);
        Observation { signal, threat }
    }

    pub fn sweep(&self, duration: i64) -> AnalysisResult<AggregationReport> {
        SignalAggregator::with_generator(self.generator()).aggregate(duration)
    }
}
