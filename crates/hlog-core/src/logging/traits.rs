//! Logger trait definition

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use super::severity::{Severity, Tag};

/// Source file and line a log call was made from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl<'a> SourceLocation<'a> {
    pub fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }
}

impl SourceLocation<'static> {
    /// Location of the nearest caller not marked `#[track_caller]`
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line())
    }
}

/// One log call, rendered immediately and discarded
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub tag: Tag,
    pub location: SourceLocation<'a>,
    pub args: fmt::Arguments<'a>,
}

impl<'a> LogRecord<'a> {
    pub fn new(tag: Tag, location: SourceLocation<'a>, args: fmt::Arguments<'a>) -> Self {
        Self {
            tag,
            location,
            args,
        }
    }
}

/// Destination for log records
///
/// Implementations:
/// - `LevelLogger`: Colored console output plus an optional log file
/// - `NoOpLogger`: Silent logger for testing
pub trait Logger: Send + Sync {
    /// Write one record
    fn record(&self, record: &LogRecord<'_>);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Per-severity shorthands that capture the caller's file and line
pub trait LoggerExt: Logger {
    /// Log at `Severity::None`
    #[track_caller]
    fn plain(&self, args: fmt::Arguments<'_>) {
        self.record(&LogRecord::new(Severity::None.tag(), SourceLocation::caller(), args));
    }

    /// Log at `Severity::Success`
    #[track_caller]
    fn success(&self, args: fmt::Arguments<'_>) {
        self.record(&LogRecord::new(Severity::Success.tag(), SourceLocation::caller(), args));
    }

    /// Log at `Severity::Error`
    #[track_caller]
    fn error(&self, args: fmt::Arguments<'_>) {
        self.record(&LogRecord::new(Severity::Error.tag(), SourceLocation::caller(), args));
    }

    /// Log at `Severity::Critical`
    #[track_caller]
    fn critical(&self, args: fmt::Arguments<'_>) {
        self.record(&LogRecord::new(Severity::Critical.tag(), SourceLocation::caller(), args));
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}
