use crate::signal::generator::SignalGenerator;
use crate::signal::record::{Classification, SignalRecord};
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed countermeasure playbook sampled by threat assessments.
pub const RECOMMENDED_ACTIONS: [&str; 4] = [
    "Engage electronic countermeasures",
    "Modify radar signature",
    "Deploy chaff/flares",
    "Change altitude/heading",
];

/// Derived threat picture for one observation. `classification` is
/// copied from the source record; the rest is independent randomness.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThreatAssessment {
    /// In [0, 100).
    pub level: f64,
    /// In [0, 100).
    pub confidence: f64,
    pub classification: Classification,
    /// 1 to 3 entries, an order-preserving subsequence of
    /// [`RECOMMENDED_ACTIONS`].
    pub recommended_actions: Vec<String>,
}

/// Derives a threat assessment for a single observation.
pub fn assess_threat<R: Rng>(record: &SignalRecord, rng: &mut R) -> ThreatAssessment {
    let action_count = rng.gen_range(1..=3);
    let mut picks = index::sample(rng, RECOMMENDED_ACTIONS.len(), action_count).into_vec();
    picks.sort_unstable();

    ThreatAssessment {
        level: rng.gen_range(0.0..100.0),
        confidence: rng.gen_range(0.0..100.0),
        classification: record.classification,
        recommended_actions: picks
            .into_iter()
            .map(|idx| RECOMMENDED_ACTIONS[idx].to_string())
            .collect(),
    }
}

impl<R: Rng> SignalGenerator<R> {
    /// Assessment drawn from the generator's own entropy source, so a
    /// seeded generator yields a reproducible observe-assess sequence.
    pub fn assess(&mut self, record: &SignalRecord) -> ThreatAssessment {
        assess_threat(record, self.rng_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn recommended_actions_length_is_one_to_three() {
        let mut generator = SignalGenerator::from_seed(31);
        let record = generator.generate();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let assessment = assess_threat(&record, &mut rng);
            let len = assessment.recommended_actions.len();
            assert!((1..=3).contains(&len));
        }
    }

    #[test]
    fn recommended_actions_form_an_ordered_duplicate_free_subsequence() {
        let mut generator = SignalGenerator::from_seed(37);
        let record = generator.generate();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let assessment = assess_threat(&record, &mut rng);
            let positions: Vec<usize> = assessment
                .recommended_actions
                .iter()
                .map(|action| {
                    RECOMMENDED_ACTIONS
                        .iter()
                        .position(|known| known == action)
                        .expect("action outside the fixed playbook")
                })
                .collect();
            for pair in positions.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn assessment_copies_the_record_classification() {
        let mut generator = SignalGenerator::from_seed(41);
        let record = generator.generate();
        let assessment = generator.assess(&record);
        assert_eq!(assessment.classification, record.classification);
        assert!((0.0..100.0).contains(&assessment.level));
        assert!((0.0..100.0).contains(&assessment.confidence));
    }

    #[test]
    fn assessment_serializes_with_wire_field_names() {
        let mut generator = SignalGenerator::from_seed(43);
        let record = generator.generate();
        let assessment = generator.assess(&record);
        let value = serde_json::to_value(&assessment).unwrap();
        assert!(value["recommendedActions"].is_array());
        assert!(value["confidence"].is_number());
    }
}
