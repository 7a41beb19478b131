//! Process-wide logger used by the `hlog!` family of macros

use std::fmt;
use std::path::PathBuf;

use once_cell::sync::Lazy;

use super::error::SinkResult;
use super::logger::LevelLogger;
use super::severity::Severity;
use crate::config::LoggerConfig;

/// Global logger instance
static LOGGER: Lazy<LevelLogger> =
    Lazy::new(|| LevelLogger::with_config(LoggerConfig::default().with_env()));

/// The process-wide logger
///
/// Console-only until [`init`] or [`init_with`] succeeds.
pub fn logger() -> &'static LevelLogger {
    &LOGGER
}

/// Open the global log file using defaults plus environment overrides
#[track_caller]
pub fn init() -> SinkResult<PathBuf> {
    logger().initialize()
}

/// Apply `config` to the global logger and open its log file
///
/// Works whether or not the macros have already logged; see
/// [`LevelLogger::initialize_with`] for the behavior once a file is open.
#[track_caller]
pub fn init_with(config: LoggerConfig) -> SinkResult<PathBuf> {
    logger().initialize_with(config)
}

/// Log through the global logger; used by the macros
#[doc(hidden)]
pub fn log(severity: Severity, file: &str, line: u32, args: fmt::Arguments<'_>) {
    logger().log(severity, file, line, args);
}

/// Log at `Severity::None` through the global logger
#[macro_export]
macro_rules! hlog {
    ($($arg:tt)*) => {
        $crate::logging::global::log(
            $crate::logging::Severity::None,
            file!(),
            line!(),
            format_args!($($arg)*),
        )
    };
}

/// Log at `Severity::Success` through the global logger
#[macro_export]
macro_rules! hlog_success {
    ($($arg:tt)*) => {
        $crate::logging::global::log(
            $crate::logging::Severity::Success,
            file!(),
            line!(),
            format_args!($($arg)*),
        )
    };
}

/// Log at `Severity::Error` through the global logger
#[macro_export]
macro_rules! hlog_error {
    ($($arg:tt)*) => {
        $crate::logging::global::log(
            $crate::logging::Severity::Error,
            file!(),
            line!(),
            format_args!($($arg)*),
        )
    };
}

/// Log at `Severity::Critical` through the global logger
#[macro_export]
macro_rules! hlog_critical {
    ($($arg:tt)*) => {
        $crate::logging::global::log(
            $crate::logging::Severity::Critical,
            file!(),
            line!(),
            format_args!($($arg)*),
        )
    };
}
