//! Leveled console logger with an optional log file

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::console::{self, Console};
use super::error::{SinkError, SinkResult};
use super::file_logger::FileSink;
use super::format::{render_colored, render_plain};
use super::severity::{Severity, Tag};
use super::traits::{LogRecord, Logger, SourceLocation};
use crate::config::LoggerConfig;

struct State {
    config: LoggerConfig,
    console: Console,
    sink: Option<FileSink>,
}

impl State {
    fn write(&mut self, lines: &Lines) {
        let console_line = if self.config.color {
            &lines.colored
        } else {
            &lines.plain
        };
        let _ = writeln!(self.console, "{}", console_line);
        let _ = self.console.flush();

        if let Some(sink) = self.sink.as_mut() {
            sink.write_line(&lines.plain);
        }
    }

    /// Open the log file in `dir` unless one is already open
    fn open_in(&mut self, dir: &Path) -> SinkResult<PathBuf> {
        if let Some(sink) = &self.sink {
            return Ok(sink.path().to_path_buf());
        }
        let sink = FileSink::create_in(dir)?;
        let path = sink.path().to_path_buf();
        self.sink = Some(sink);
        Ok(path)
    }
}

/// Both renderings of one record, built before taking the lock
struct Lines {
    colored: String,
    plain: String,
}

impl Lines {
    fn render(record: &LogRecord<'_>) -> Self {
        // Formatting may run arbitrary Display impls, including ones that log
        let message = record.args.to_string();
        Self {
            colored: render_colored(record.tag, record.location, &message),
            plain: render_plain(record.tag, record.location, &message),
        }
    }
}

/// Writes leveled, color-coded lines to the console and, once
/// initialized, a plain copy of each line to a timestamped log file
///
/// Console output never depends on the file: if opening it fails,
/// every call still reaches the console.
///
/// # Example
///
/// ```no_run
/// use hlog_core::logging::{LevelLogger, Severity};
///
/// let logger = LevelLogger::new();
/// if let Err(err) = logger.initialize() {
///     // Already reported on the console; keep going without a file
///     let _ = err;
/// }
/// logger.log(Severity::Success, file!(), line!(), format_args!("Loaded {} items", 7));
/// ```
pub struct LevelLogger {
    state: Mutex<State>,
}

impl Default for LevelLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelLogger {
    /// Console-only logger on stdout with the default config
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    /// Logger on stdout with the given config
    pub fn with_config(config: LoggerConfig) -> Self {
        Self::with_console(config, console::stdout())
    }

    /// Logger writing console lines to an arbitrary stream
    pub fn with_console(config: LoggerConfig, console: impl Write + Send + 'static) -> Self {
        Self {
            state: Mutex::new(State {
                config,
                console: Box::new(console),
                sink: None,
            }),
        }
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> LoggerConfig {
        self.state.lock().config.clone()
    }

    /// Whether a log file is open
    pub fn is_file_open(&self) -> bool {
        self.state.lock().sink.is_some()
    }

    /// Path of the open log file, if any
    pub fn log_path(&self) -> Option<PathBuf> {
        self.state.lock().sink.as_ref().map(|s| s.path().to_path_buf())
    }

    /// Open the log file in the configured directory
    ///
    /// See [`initialize_in`](Self::initialize_in).
    #[track_caller]
    pub fn initialize(&self) -> SinkResult<PathBuf> {
        let location = SourceLocation::caller();
        let result = {
            let mut state = self.state.lock();
            if !state.config.file_sink {
                return Err(SinkError::Disabled);
            }
            let dir = state.config.log_dir();
            state.open_in(&dir)
        };
        self.report_failure(result, location)
    }

    /// Replace the configuration, then open the log file it names
    ///
    /// The new config is applied only while no file is open. With a file
    /// already open, the same config returns its path and a different one
    /// fails with [`SinkError::AlreadyOpen`].
    #[track_caller]
    pub fn initialize_with(&self, config: LoggerConfig) -> SinkResult<PathBuf> {
        let location = SourceLocation::caller();
        let result = {
            let mut state = self.state.lock();
            if let Some(sink) = &state.sink {
                if state.config == config {
                    return Ok(sink.path().to_path_buf());
                }
                return Err(SinkError::AlreadyOpen {
                    path: sink.path().to_path_buf(),
                });
            }
            state.config = config;
            if !state.config.file_sink {
                return Err(SinkError::Disabled);
            }
            let dir = state.config.log_dir();
            state.open_in(&dir)
        };
        self.report_failure(result, location)
    }

    /// Open `log_YYYYMMDD_HHMMSS.txt` in `dir`
    ///
    /// Once a file is open, later calls return its path without reopening.
    /// On failure one critical line is written to the console and the
    /// logger stays console-only; whether that is fatal is up to the caller.
    #[track_caller]
    pub fn initialize_in(&self, dir: impl AsRef<Path>) -> SinkResult<PathBuf> {
        let location = SourceLocation::caller();
        let result = self.state.lock().open_in(dir.as_ref());
        self.report_failure(result, location)
    }

    fn report_failure(
        &self,
        result: SinkResult<PathBuf>,
        location: SourceLocation<'_>,
    ) -> SinkResult<PathBuf> {
        if let Err(err) = &result {
            self.record(&LogRecord::new(
                Severity::Critical.tag(),
                location,
                format_args!("{}", err),
            ));
        }
        result
    }

    /// Log one message attributed to `source_file:source_line`
    pub fn log(&self, severity: Severity, source_file: &str, source_line: u32, args: fmt::Arguments<'_>) {
        self.log_tag(severity.tag(), source_file, source_line, args);
    }

    /// Log with a raw numeric severity; unknown codes are tagged `[UNKNOWN]`
    pub fn log_code(&self, code: i32, source_file: &str, source_line: u32, args: fmt::Arguments<'_>) {
        self.log_tag(Tag::for_code(code), source_file, source_line, args);
    }

    fn log_tag(&self, tag: Tag, source_file: &str, source_line: u32, args: fmt::Arguments<'_>) {
        self.record(&LogRecord::new(tag, SourceLocation::new(source_file, source_line), args));
    }
}

impl Logger for LevelLogger {
    fn record(&self, record: &LogRecord<'_>) {
        let lines = Lines::render(record);
        self.state.lock().write(&lines);
    }
}

impl fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("LevelLogger")
            .field("config", &state.config)
            .field("log_path", &state.sink.as_ref().map(FileSink::path))
            .finish()
    }
}
