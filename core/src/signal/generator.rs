use crate::signal::record::{Classification, Coordinates, Modulation, SignalRecord};
use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Time source injected into the generator so tests can pin timestamps.
pub trait Clock: Send {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time source used outside of tests.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Produces synthetic signal observations, one per call.
///
/// Every field is drawn independently and uniformly from its declared
/// range; generation never fails and consumes nothing but entropy.
pub struct SignalGenerator<R: Rng = StdRng> {
    rng: R,
    clock: Box<dyn Clock>,
}

impl SignalGenerator<StdRng> {
    pub fn new() -> Self {
        Self::with_parts(StdRng::from_entropy(), Box::new(SystemClock))
    }

    /// Seeded generator producing a reproducible record sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_parts(StdRng::seed_from_u64(seed), Box::new(SystemClock))
    }
}

impl Default for SignalGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SignalGenerator<R> {
    pub fn with_parts(rng: R, clock: Box<dyn Clock>) -> Self {
        Self { rng, clock }
    }

    pub fn generate(&mut self) -> SignalRecord {
        let modulation = Modulation::ALL[self.rng.gen_range(0..Modulation::ALL.len())];
        let classification =
            Classification::ALL[self.rng.gen_range(0..Classification::ALL.len())];

        SignalRecord {
            frequency: self.rng.gen_range(2000.0..3000.0),
            amplitude: self.rng.gen_range(0.0..100.0),
            pulse_repetition_interval: self.rng.gen_range(500.0..1500.0),
            modulation,
            pulse_width: self.rng.gen_range(1.0..21.0),
            bandwidth: self.rng.gen_range(50.0..150.0),
            threat_level: self.rng.gen_range(0.0..100.0),
            signal_to_noise: self.rng.gen_range(10.0..40.0),
            doppler: self.rng.gen_range(-500.0..500.0),
            classification,
            timestamp: self.clock.now(),
            coordinates: Coordinates {
                latitude: self.rng.gen_range(-90.0..=90.0),
                longitude: self.rng.gen_range(-180.0..=180.0),
                altitude: self.rng.gen_range(0..=30_000),
            },
        }
    }

    pub(crate) fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
