//! No-op logger implementation

use super::traits::{LogRecord, Logger};

/// A logger that does nothing
///
/// Useful for testing or when logging is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn record(&self, _record: &LogRecord<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LoggerExt, SharedLogger};
    use std::sync::Arc;

    #[test]
    fn test_noop_logger() {
        let logger: SharedLogger = Arc::new(NoOpLogger::new());

        // These should all do nothing without panicking
        logger.plain(format_args!("plain message"));
        logger.success(format_args!("success message"));
        logger.error(format_args!("error message"));
        logger.critical(format_args!("critical message"));
    }
}
