//! Unit tests for runtime.rs
//!
//! The runtime is process-global, so every test runs under `#[serial]`
//! and starts from a clean registry.

use super::*;
use crate::session::CameraHandle;
use serial_test::serial;

fn fresh_runtime() {
    Runtime::initialize().unwrap();
    Runtime::shutdown();
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
#[serial]
fn test_initialize_is_idempotent() {
    assert!(Runtime::initialize().is_ok());
    assert!(Runtime::initialize().is_ok());
}

// ============================================================================
// Target registry lifecycle
// ============================================================================

#[test]
#[serial]
fn test_target_registry_not_created() {
    fresh_runtime();
    let result = Runtime::target_registry();
    assert!(matches!(result, Err(Error::InitializationFailed(_))));
}

#[test]
#[serial]
fn test_create_and_get_target_registry() {
    fresh_runtime();
    Runtime::create_target_registry().unwrap();

    let registry = Runtime::target_registry().unwrap();
    assert_eq!(registry.lock().unwrap().session_count(), 0);

    Runtime::shutdown();
}

#[test]
#[serial]
fn test_create_target_registry_twice_fails() {
    fresh_runtime();
    Runtime::create_target_registry().unwrap();

    let result = Runtime::create_target_registry();
    assert!(matches!(result, Err(Error::InitializationFailed(_))));

    Runtime::shutdown();
}

#[test]
#[serial]
fn test_target_registry_is_shared() {
    fresh_runtime();
    Runtime::create_target_registry().unwrap();

    let a = Runtime::target_registry().unwrap();
    let b = Runtime::target_registry().unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    let session = a.lock().unwrap().register_session("plane");
    a.lock().unwrap().acquire(CameraHandle(1), session).unwrap();
    assert_eq!(b.lock().unwrap().owner(CameraHandle(1)), Some(session));

    Runtime::shutdown();
}

#[test]
#[serial]
fn test_destroy_target_registry_allows_recreate() {
    fresh_runtime();
    Runtime::create_target_registry().unwrap();
    Runtime::destroy_target_registry().unwrap();

    assert!(Runtime::target_registry().is_err());
    assert!(Runtime::create_target_registry().is_ok());

    Runtime::shutdown();
}

#[test]
#[serial]
fn test_shutdown_keeps_existing_handles_alive() {
    fresh_runtime();
    Runtime::create_target_registry().unwrap();
    let registry = Runtime::target_registry().unwrap();

    Runtime::shutdown();

    assert!(Runtime::target_registry().is_err());
    assert_eq!(registry.lock().unwrap().session_count(), 0);
}

// ============================================================================
// Logger
// ============================================================================

struct CountingLogger {
    count: Arc<Mutex<usize>>,
}

impl Logger for CountingLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.source == "runtime_tests" {
            *self.count.lock().unwrap() += 1;
        }
    }
}

#[test]
#[serial]
fn test_set_and_reset_logger() {
    let count = Arc::new(Mutex::new(0));
    Runtime::set_logger(CountingLogger { count: count.clone() });

    Runtime::log(LogSeverity::Info, "runtime_tests", "one".to_string());
    Runtime::log_detailed(LogSeverity::Error, "runtime_tests", "two".to_string(), file!(), line!());
    assert_eq!(*count.lock().unwrap(), 2);

    Runtime::reset_logger();
    Runtime::log(LogSeverity::Info, "runtime_tests", "three".to_string());
    assert_eq!(*count.lock().unwrap(), 2);
}
