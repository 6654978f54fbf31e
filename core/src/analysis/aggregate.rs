use crate::math::stats::StatsHelper;
use crate::prelude::{AnalysisError, AnalysisResult};
use crate::signal::generator::SignalGenerator;
use crate::signal::record::{Classification, Modulation, SignalRecord};
use crate::telemetry::log::LogManager;
use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};

/// Observed frequency extremes across one batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FrequencyRange {
    pub min: f64,
    pub max: f64,
}

/// Summary statistics derived from exactly one batch of observations.
/// Recomputed per call; nothing persists between aggregations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregationReport {
    pub average_frequency: f64,
    pub peak_amplitude: f64,
    #[serde(rename = "averageSNR")]
    pub average_snr: f64,
    pub frequency_range: FrequencyRange,
    /// Unique modulations present, first-seen order.
    pub distinct_modulation_types: Vec<Modulation>,
    /// Unique classifications present, first-seen order.
    pub distinct_classifications: Vec<Classification>,
    /// The full batch the report was derived from, in generation order.
    pub source_signals: Vec<SignalRecord>,
}

impl AggregationReport {
    /// Reduces an externally supplied batch. An empty batch is the same
    /// condition as requesting zero signals.
    pub fn from_signals(signals: Vec<SignalRecord>) -> AnalysisResult<Self> {
        let frequencies: Vec<f64> = signals.iter().map(|s| s.frequency).collect();
        let (min, max) =
            StatsHelper::extrema(&frequencies).ok_or(AnalysisError::InvalidCount(0))?;

        let snrs: Vec<f64> = signals.iter().map(|s| s.signal_to_noise).collect();
        let peak_amplitude = signals
            .iter()
            .map(|s| s.amplitude)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut distinct_modulation_types = Vec::new();
        let mut distinct_classifications = Vec::new();
        for signal in &signals {
            if !distinct_modulation_types.contains(&signal.modulation) {
                distinct_modulation_types.push(signal.modulation);
            }
            if !distinct_classifications.contains(&signal.classification) {
                distinct_classifications.push(signal.classification);
            }
        }

        Ok(Self {
            average_frequency: StatsHelper::mean(&frequencies),
            peak_amplitude,
            average_snr: StatsHelper::mean(&snrs),
            frequency_range: FrequencyRange { min, max },
            distinct_modulation_types,
            distinct_classifications,
            source_signals: signals,
        })
    }
}

/// Drives a generator `count` times and folds the batch into a report.
pub struct SignalAggregator<R: Rng = StdRng> {
    generator: SignalGenerator<R>,
    logger: LogManager,
}

impl SignalAggregator<StdRng> {
    pub fn new() -> Self {
        Self::with_generator(SignalGenerator::new())
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::with_generator(SignalGenerator::from_seed(seed))
    }
}

impl Default for SignalAggregator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SignalAggregator<R> {
    pub fn with_generator(generator: SignalGenerator<R>) -> Self {
        Self {
            generator,
            logger: LogManager::new("aggregate"),
        }
    }

    /// Generates exactly `count` signals and reduces them. `count <= 0`
    /// is reported as `InvalidCount`, never clamped; defaulting belongs
    /// to the caller.
    pub fn aggregate(&mut self, count: i64) -> AnalysisResult<AggregationReport> {
        if count <= 0 {
            self.logger
                .record_rejection(&format!("rejected batch request of {}", count));
            return Err(AnalysisError::InvalidCount(count));
        }

        let signals: Vec<SignalRecord> = (0..count).map(|_| self.generator.generate()).collect();
        self.logger.record(&format!("reduced batch of {}", count));
        AggregationReport::from_signals(signals)
    }

    pub fn generator_mut(&mut self) -> &mut SignalGenerator<R> {
        &mut self.generator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_produces_exactly_count_source_signals() {
        let mut aggregator = SignalAggregator::from_seed(5);
        let report = aggregator.aggregate(60).unwrap();
        assert_eq!(report.source_signals.len(), 60);
    }

    #[test]
    fn aggregate_rejects_non_positive_counts() {
        let mut aggregator = SignalAggregator::from_seed(5);
        assert_eq!(
            aggregator.aggregate(0),
            Err(AnalysisError::InvalidCount(0))
        );
        assert_eq!(
            aggregator.aggregate(-5),
            Err(AnalysisError::InvalidCount(-5))
        );
    }

    #[test]
    fn frequency_statistics_bound_every_source_signal() {
        let mut aggregator = SignalAggregator::from_seed(9);
        let report = aggregator.aggregate(200).unwrap();
        let range = report.frequency_range;
        for signal in &report.source_signals {
            assert!(range.min <= signal.frequency && signal.frequency <= range.max);
        }
        assert!(range.min <= report.average_frequency);
        assert!(report.average_frequency <= range.max);
    }

    #[test]
    fn peak_amplitude_is_the_batch_maximum() {
        let mut aggregator = SignalAggregator::from_seed(13);
        let report = aggregator.aggregate(50).unwrap();
        let max = report
            .source_signals
            .iter()
            .map(|s| s.amplitude)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(report.peak_amplitude, max);
    }

    #[test]
    fn single_signal_batch_collapses_all_statistics() {
        let mut aggregator = SignalAggregator::from_seed(21);
        let report = aggregator.aggregate(1).unwrap();
        assert_eq!(report.source_signals.len(), 1);
        let only = &report.source_signals[0];
        assert_eq!(report.average_frequency, only.frequency);
        assert_eq!(report.frequency_range.min, only.frequency);
        assert_eq!(report.frequency_range.max, only.frequency);
        assert_eq!(report.peak_amplitude, only.amplitude);
        assert_eq!(report.average_snr, only.signal_to_noise);
        assert_eq!(report.distinct_modulation_types, vec![only.modulation]);
        assert_eq!(report.distinct_classifications, vec![only.classification]);
    }

    #[test]
    fn distinct_lists_are_duplicate_free_subsets() {
        let mut aggregator = SignalAggregator::from_seed(17);
        let report = aggregator.aggregate(300).unwrap();

        assert!(report.distinct_modulation_types.len() <= Modulation::ALL.len());
        for (idx, modulation) in report.distinct_modulation_types.iter().enumerate() {
            assert!(Modulation::ALL.contains(modulation));
            assert!(!report.distinct_modulation_types[idx + 1..].contains(modulation));
        }

        assert!(report.distinct_classifications.len() <= Classification::ALL.len());
        for (idx, classification) in report.distinct_classifications.iter().enumerate() {
            assert!(Classification::ALL.contains(classification));
            assert!(!report.distinct_classifications[idx + 1..].contains(classification));
        }
    }

    #[test]
    fn from_signals_rejects_an_empty_batch() {
        assert_eq!(
            AggregationReport::from_signals(Vec::new()),
            Err(AnalysisError::InvalidCount(0))
        );
    }

    #[test]
    fn report_serializes_with_wire_field_names() {
        let mut aggregator = SignalAggregator::from_seed(2);
        let report = aggregator.aggregate(3).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["averageFrequency"].is_number());
        assert!(value["averageSNR"].is_number());
        assert!(value["frequencyRange"]["min"].is_number());
        assert_eq!(value["sourceSignals"].as_array().unwrap().len(), 3);
        assert!(value["distinctModulationTypes"].is_array());
        assert!(value["distinctClassifications"].is_array());
    }
}
