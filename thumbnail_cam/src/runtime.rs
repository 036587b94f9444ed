//! Thumbnail Cam Runtime - process-wide state shared by all sessions
//!
//! Holds the target ownership registry and the logger. Sessions from
//! different planes in the same scene must see the same registry so
//! that only one of them drives the upload camera.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::session::TargetRegistry;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global runtime state storage
static RUNTIME_STATE: OnceLock<RuntimeState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

struct RuntimeState {
    target_registry: RwLock<Option<Arc<Mutex<TargetRegistry>>>>,
}

impl RuntimeState {
    fn new() -> Self {
        Self {
            target_registry: RwLock::new(None),
        }
    }
}

// ===== PUBLIC API =====

/// Runtime singleton manager
///
/// # Example
///
/// ```no_run
/// use thumbnail_cam::thumbcam::Runtime;
///
/// Runtime::initialize()?;
/// Runtime::create_target_registry()?;
///
/// let registry = Runtime::target_registry()?;
/// // Hand `registry` to every AlignSession in the scene...
///
/// Runtime::shutdown();
/// # Ok::<(), thumbnail_cam::thumbcam::Error>(())
/// ```
pub struct Runtime;

impl Runtime {
    /// Log errors before returning them
    fn log_and_return_error(error: Error) -> Error {
        crate::thumbcam_error!("thumbcam::Runtime", "{}", error);
        error
    }

    fn state() -> Result<&'static RuntimeState> {
        RUNTIME_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Runtime not initialized. Call Runtime::initialize() first.".to_string())
            ))
    }

    /// Initialize the runtime
    ///
    /// Idempotent; must be called before creating the target registry.
    pub fn initialize() -> Result<()> {
        RUNTIME_STATE.get_or_init(RuntimeState::new);
        Ok(())
    }

    /// Drop every subsystem. Sessions keep their own `Arc` to the
    /// registry until they are dropped.
    pub fn shutdown() {
        if let Some(state) = RUNTIME_STATE.get() {
            if let Ok(mut registry) = state.target_registry.write() {
                *registry = None;
            }
        }
    }

    // ===== TARGET REGISTRY API =====

    /// Create and register the shared target registry
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The runtime is not initialized
    /// - A registry already exists
    /// - The registry lock is poisoned
    pub fn create_target_registry() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.target_registry.write()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("TargetRegistry slot".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("TargetRegistry already exists. Call Runtime::destroy_target_registry() first.".to_string())
            ));
        }

        *lock = Some(Arc::new(Mutex::new(TargetRegistry::new())));

        crate::thumbcam_info!("thumbcam::Runtime", "TargetRegistry created");

        Ok(())
    }

    /// Get the shared target registry
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime is not initialized or the
    /// registry has not been created.
    pub fn target_registry() -> Result<Arc<Mutex<TargetRegistry>>> {
        let state = Self::state()?;

        let lock = state.target_registry.read()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("TargetRegistry slot".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("TargetRegistry not created. Call Runtime::create_target_registry() first.".to_string())
            ))
    }

    /// Destroy the shared target registry
    pub fn destroy_target_registry() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.target_registry.write()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("TargetRegistry slot".to_string())
            ))?;

        *lock = None;

        crate::thumbcam_info!("thumbcam::Runtime", "TargetRegistry destroyed");

        Ok(())
    }

    // ===== LOGGING API =====

    /// Replace the default logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to DefaultLogger
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Log without file:line (used by thumbcam_info!, thumbcam_warn!, ...)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Log with file:line (used by thumbcam_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
