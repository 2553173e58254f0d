use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Store -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Store -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Store -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Store -- ", "{}", message);
    }
}
