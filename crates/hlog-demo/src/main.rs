//! Small host application for the global logger
//!
//! Loads the user config, opens the log file, and logs one line per
//! severity. A log file that can't be opened is not fatal here.

use hlog_core::{hlog, hlog_critical, hlog_error, hlog_success, LoggerConfig};

fn main() {
    let config = match LoggerConfig::load() {
        Ok(config) => config,
        Err(err) => {
            hlog_error!("ignoring config: {}", err);
            LoggerConfig::default().with_env()
        }
    };

    match hlog_core::init_with(config) {
        Ok(path) => hlog!("logging to {}", path.display()),
        Err(hlog_core::SinkError::Disabled) => hlog!("file logging disabled"),
        // Reported at critical level by the logger itself
        Err(_) => {}
    }

    hlog!("plain message");
    hlog_success!("Loaded {} items", 7);
    hlog_error!("bad value: {}", "oops");
    hlog_critical!("something is on fire");
}
