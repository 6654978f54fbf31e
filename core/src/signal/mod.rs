pub mod generator;
pub mod record;

pub use generator::{Clock, SignalGenerator, SystemClock};
pub use record::{Classification, Coordinates, Modulation, SignalRecord};
