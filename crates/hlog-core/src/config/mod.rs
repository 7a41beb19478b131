//! Logger configuration
//!
//! Layered from, in increasing precedence:
//! - built-in defaults
//! - a YAML (or JSON) file, by default `~/.config/hlog/config.yaml`
//! - `HLOG_*` environment variables and `NO_COLOR`

mod traits;
mod file;

pub use traits::{ConfigError, ConfigResult};
pub use file::LoggerConfig;
