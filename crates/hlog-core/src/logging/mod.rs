//! Leveled console logging with an optional timestamped log file

mod traits;
mod noop;
mod console;
mod error;
mod format;
mod logger;
mod severity;
pub mod file_logger;
pub mod global;

pub use traits::{Logger, LoggerExt, LogRecord, SourceLocation, SharedLogger};
pub use noop::NoOpLogger;
pub use console::{enable_virtual_terminal, Console, MemoryConsole};
pub use error::{SinkError, SinkResult};
pub use format::{render_colored, render_plain, short_filename};
pub use logger::LevelLogger;
pub use severity::{color, Severity, Tag};

// Re-export file sink and global logger functions for convenience
pub use file_logger::{log_file_name, FileSink};
pub use global::{init, init_with, logger};
