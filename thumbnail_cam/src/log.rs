//! Logging for thumbnail camera alignment
//!
//! Diagnostics for the operator (non-flat plane, competing sessions,
//! camera found, placement applied) go through a pluggable `Logger`:
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - Swappable at runtime via `Runtime::set_logger`
//! - File and line information for ERROR logs

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Hosts usually forward entries into their own console
/// (editor log window, file, test capture buffer).
///
/// # Example
///
/// ```no_run
/// use thumbnail_cam::thumbcam::log::{Logger, LogEntry};
///
/// struct EditorConsole;
///
/// impl Logger for EditorConsole {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{}: {}", entry.source, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source component (e.g., "thumbcam::FrameFitter", "thumbcam::AlignSession")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-tick chatter (change detection, waiting for the camera)
    Trace,

    /// Computed placements
    Debug,

    /// Session lifecycle (camera acquired, released)
    Info,

    /// Operator mistakes that do not stop alignment
    Warn,

    /// Alignment skipped (bad plane, competing sessions)
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by the console logger
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl DefaultLogger {
    /// Render an entry as a single console line (with ANSI colors when enabled)
    pub fn format_entry(entry: &LogEntry) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let label = entry.severity.label();
        let severity_str = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };

        let source = entry.source.bright_blue();

        match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            ),
            _ => format!(
                "[{}] [{}] [{}] {}",
                timestamp, severity_str, source, entry.message
            ),
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let line = Self::format_entry(entry);
        if entry.severity >= LogSeverity::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
#[macro_export]
macro_rules! thumbcam_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::thumbcam::Runtime::log(
            $crate::thumbcam::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! thumbcam_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::thumbcam::Runtime::log(
            $crate::thumbcam::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
///
/// # Example
///
/// ```no_run
/// thumbnail_cam::thumbcam_info!("thumbcam::AlignSession", "Camera {} acquired", 3);
/// ```
#[macro_export]
macro_rules! thumbcam_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::thumbcam::Runtime::log(
            $crate::thumbcam::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! thumbcam_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::thumbcam::Runtime::log(
            $crate::thumbcam::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! thumbcam_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::thumbcam::Runtime::log_detailed(
            $crate::thumbcam::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an ERROR and build the matching `Error` value
///
/// # Example
///
/// ```ignore
/// let camera = host.find_camera(path)
///     .ok_or_else(|| thumbcam_err!("thumbcam::AlignSession", Error::MissingTarget, "{}", path))?;
/// ```
#[macro_export]
macro_rules! thumbcam_err {
    ($source:expr, $kind:path, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::thumbcam::Runtime::log_detailed(
            $crate::thumbcam::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $kind(message)
    }};
}

/// Log an ERROR and return it from the enclosing function
#[macro_export]
macro_rules! thumbcam_bail {
    ($source:expr, $kind:path, $($arg:tt)*) => {
        return Err($crate::thumbcam_err!($source, $kind, $($arg)*))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
