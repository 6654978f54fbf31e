use log::{info, warn};

/// Component-scoped logger handed to core operations.
pub struct LogManager {
    component: &'static str,
}

impl LogManager {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.component, message);
    }

    pub fn record_rejection(&self, message: &str) {
        warn!("[{}] {}", self.component, message);
    }
}
