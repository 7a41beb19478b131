//! hlog Core
//!
//! Leveled, color-coded console logging. Each line carries a severity
//! label, the caller's file and line, and the formatted message. Once
//! initialized, a plain-text copy of every line also goes to
//! `log_YYYYMMDD_HHMMSS.txt`.
//!
//! ```rust,no_run
//! use hlog_core::{hlog, hlog_error, hlog_success};
//!
//! if let Err(err) = hlog_core::init() {
//!     // Already reported at critical level; continue console-only
//!     let _ = err;
//! }
//!
//! hlog!("starting up");
//! hlog_success!("Loaded {} items", 7);
//! hlog_error!("bad value: {}", "oops");
//! ```

pub mod config;
pub mod logging;

pub use logging::{
    init, init_with, logger,
    LevelLogger, Logger, LoggerExt, NoOpLogger, SharedLogger,
    Severity, SinkError, SinkResult,
};

pub use config::{ConfigError, ConfigResult, LoggerConfig};
