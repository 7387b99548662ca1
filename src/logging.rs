//! File logger for the binaries.
//!
//! The terminal is owned by the renderer, so records go to an append-only
//! file instead of stderr. Nothing is installed unless a path is configured.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

use crate::config::Config;

pub struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        Ok(Self {
            level,
            file: Mutex::new(file),
        })
    }
}

/// One log line: `<local time> [<LEVEL>] <target>: <message>`
pub fn format_line(record: &Record<'_>) -> String {
    format!(
        "{} [{}] {}: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", format_line(record));
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Install the file logger if `config.log_path` is set.
///
/// Returns whether a logger was installed.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };
    let logger = FileLogger::open(path, config.log_level)?;
    log::set_boxed_logger(Box::new(logger)).context("a logger is already installed")?;
    log::set_max_level(config.log_level);
    Ok(true)
}
