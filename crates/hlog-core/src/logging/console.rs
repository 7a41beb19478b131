//! Console writers

use std::io::{self, Write};
use std::sync::{Arc, Once};

use parking_lot::Mutex;

/// Console stream a `LevelLogger` writes colored lines to
pub type Console = Box<dyn Write + Send>;

/// Standard output, with ANSI support enabled on first use
pub fn stdout() -> Console {
    enable_virtual_terminal();
    Box::new(io::stdout())
}

/// A console that keeps everything written to it in memory
///
/// Clones share the same buffer, so a test can hand one clone to a
/// logger and read the output back through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryConsole {
    /// Create an empty memory console
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written output split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Drop everything written so far
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

static VIRTUAL_TERMINAL: Once = Once::new();

/// Turn on ANSI escape handling for stdout, once per process
///
/// Best effort: if the console refuses, escape codes show up literally.
pub fn enable_virtual_terminal() {
    VIRTUAL_TERMINAL.call_once(|| {
        let _ = platform::enable_virtual_terminal();
    });
}

#[cfg(windows)]
mod platform {
    use windows_sys::Win32::Foundation::INVALID_HANDLE_VALUE;
    use windows_sys::Win32::System::Console::{
        GetConsoleMode, GetStdHandle, SetConsoleMode, ENABLE_VIRTUAL_TERMINAL_PROCESSING,
        STD_OUTPUT_HANDLE,
    };

    pub(super) fn enable_virtual_terminal() -> bool {
        unsafe {
            let handle = GetStdHandle(STD_OUTPUT_HANDLE);
            if handle == INVALID_HANDLE_VALUE || handle == 0 {
                return false;
            }
            let mut mode = 0;
            if GetConsoleMode(handle, &mut mode) == 0 {
                return false;
            }
            SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING) != 0
        }
    }
}

#[cfg(not(windows))]
mod platform {
    pub(super) fn enable_virtual_terminal() -> bool {
        true
    }
}
