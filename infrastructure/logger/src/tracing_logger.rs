use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`; every line is tagged with the
/// `products` target so it can be filtered with `RUST_LOG=products=debug`.
pub struct TracingLogger;

const TARGET: &str = "products";

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
