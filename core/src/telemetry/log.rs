use log::{error, info, trace, warn};

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn trace(&self, message: &str) {
        trace!("{}", message);
    }

    pub fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    pub fn error(&self, message: &str) {
        error!("{}", message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
