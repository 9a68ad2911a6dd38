//! Log sinks
//!
//! Thread-safe writers for the access and error streams. Each stream goes to
//! a console stream by default, or to an append-mode file when a path is
//! configured.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

static SINKS: OnceLock<LogSinks> = OnceLock::new();

enum Target {
    Stdout,
    Stderr,
    File(File),
}

/// The pair of output targets the logger writes through.
pub struct LogSinks {
    access: Mutex<Target>,
    error: Mutex<Target>,
}

impl LogSinks {
    fn new(access_file: Option<&str>, error_file: Option<&str>) -> io::Result<Self> {
        let access = match access_file {
            Some(path) => Target::File(open_log_file(path)?),
            None => Target::Stdout,
        };
        let error = match error_file {
            Some(path) => Target::File(open_log_file(path)?),
            None => Target::Stderr,
        };
        Ok(Self {
            access: Mutex::new(access),
            error: Mutex::new(error),
        })
    }

    pub fn write_access(&self, line: &str) {
        if let Ok(mut target) = self.access.lock() {
            write_line(&mut target, line);
        }
    }

    pub fn write_error(&self, line: &str) {
        if let Ok(mut target) = self.error.lock() {
            write_line(&mut target, line);
        }
    }
}

fn write_line(target: &mut Target, line: &str) {
    match target {
        Target::Stdout => println!("{line}"),
        Target::Stderr => eprintln!("{line}"),
        Target::File(file) => {
            let _ = writeln!(file, "{line}");
        }
    }
}

/// Open a log file for appending, creating parent directories as needed.
fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global sinks. Call once at startup; fails if a log file
/// cannot be opened or the sinks are already installed.
pub fn init(access_file: Option<&str>, error_file: Option<&str>) -> io::Result<()> {
    let sinks = LogSinks::new(access_file, error_file)?;
    SINKS
        .set(sinks)
        .map_err(|_| io::Error::new(io::ErrorKind::AlreadyExists, "log sinks already installed"))
}

/// The installed sinks, if `init` has run.
pub fn sinks() -> Option<&'static LogSinks> {
    SINKS.get()
}
