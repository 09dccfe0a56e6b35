/// Logging port used by the use cases. The infrastructure layer decides
/// where the lines end up.
#[cfg_attr(test, mockall::automock)]
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

#[cfg(test)]
pub(crate) fn silent_logger() -> std::sync::Arc<dyn Logger> {
    let mut logger = MockLogger::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    std::sync::Arc::new(logger)
}
