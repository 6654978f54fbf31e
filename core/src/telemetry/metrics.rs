use std::sync::Mutex;

/// Request counters shared with the HTTP boundary.
pub struct MetricsRecorder {
    inner: Mutex<Counters>,
}

struct Counters {
    served: usize,
    rejected: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters {
                served: 0,
                rejected: 0,
            }),
        }
    }

    pub fn record_served(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.served += 1;
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.rejected += 1;
        }
    }

    /// (served, rejected) snapshot.
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(counters) = self.inner.lock() {
            (counters.served, counters.rejected)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_track_served_and_rejected_independently() {
        let metrics = MetricsRecorder::new();
        metrics.record_served();
        metrics.record_served();
        metrics.record_rejected();
        assert_eq!(metrics.snapshot(), (2, 1));
    }
}
