//! Integration tests for operator diagnostics
//!
//! Verifies what a session reports through the pluggable logger.
//!
//! Run with: cargo test --test logging_integration_tests

use std::sync::{Arc, Mutex};
use thumbnail_cam::glam::Vec3;
use thumbnail_cam::thumbcam::Runtime;
use thumbnail_cam::thumbcam::log::{LogEntry, LogSeverity, Logger};
use thumbnail_cam::thumbcam::framing::{CameraIntrinsics, PlaneExtents};
use thumbnail_cam::thumbcam::session::{
    AlignSession, MemorySceneHost, SessionConfig, DEFAULT_CAMERA_PATH,
};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn install() -> Arc<Mutex<Vec<LogEntry>>> {
        let entries = Arc::new(Mutex::new(Vec::new()));
        Runtime::set_logger(Self { entries: entries.clone() });
        entries
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn errors_from(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries.lock().unwrap()
        .iter()
        .filter(|e| e.severity == LogSeverity::Error && e.source == source)
        .cloned()
        .collect()
}

fn setup_runtime() {
    Runtime::initialize().unwrap();
    Runtime::shutdown();
    Runtime::create_target_registry().unwrap();
}

// ============================================================================
// PREFLIGHT
// ============================================================================

#[test]
#[serial]
fn test_integration_preexisting_camera_is_reported() {
    setup_runtime();
    let entries = TestLogger::install();

    let mut host = MemorySceneHost::new();
    let surface = host.add_surface(PlaneExtents::new(1.0, 1.0));
    host.add_camera(DEFAULT_CAMERA_PATH, CameraIntrinsics::default());

    let mut session = AlignSession::with_runtime_registry("plane", surface, SessionConfig::default()).unwrap();
    session.start(&host).unwrap();

    let errors = errors_from(&entries, "thumbcam::AlignSession");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains(DEFAULT_CAMERA_PATH));
    assert!(errors[0].file.is_some());
    assert!(errors[0].line.is_some());

    Runtime::reset_logger();
    Runtime::shutdown();
}

#[test]
#[serial]
fn test_integration_competing_sessions_are_reported() {
    setup_runtime();
    let entries = TestLogger::install();

    let mut host = MemorySceneHost::new();
    let a = host.add_surface(PlaneExtents::new(1.0, 1.0));
    let b = host.add_surface(PlaneExtents::new(1.0, 1.0));

    let mut first = AlignSession::with_runtime_registry("plane_a", a, SessionConfig::default()).unwrap();
    let _second = AlignSession::with_runtime_registry("plane_b", b, SessionConfig::default()).unwrap();
    first.start(&host).unwrap();

    let errors = errors_from(&entries, "thumbcam::AlignSession");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("2 align sessions"));

    Runtime::reset_logger();
    Runtime::shutdown();
}

// ============================================================================
// PER-TICK DIAGNOSTICS
// ============================================================================

#[test]
#[serial]
fn test_integration_repeated_failure_logged_once() {
    setup_runtime();
    let entries = TestLogger::install();

    let mut host = MemorySceneHost::new();
    let surface = host.add_surface(PlaneExtents::from_half_size(Vec3::new(0.5, 0.5, 0.5)));
    host.add_camera(DEFAULT_CAMERA_PATH, CameraIntrinsics::default());
    let mut session = AlignSession::with_runtime_registry("cube", surface, SessionConfig::default()).unwrap();

    for _ in 0..5 {
        assert!(session.tick(&mut host).is_err());
    }

    let errors = errors_from(&entries, "thumbcam::AlignSession");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("not an x-z plane"));

    Runtime::reset_logger();
    Runtime::shutdown();
}

#[test]
#[serial]
fn test_integration_duplicate_ownership_logged_by_registry() {
    setup_runtime();
    let entries = TestLogger::install();

    let mut host = MemorySceneHost::new();
    let a = host.add_surface(PlaneExtents::new(1.0, 1.0));
    let b = host.add_surface(PlaneExtents::new(1.0, 1.0));
    host.add_camera(DEFAULT_CAMERA_PATH, CameraIntrinsics::default());

    let mut first = AlignSession::with_runtime_registry("plane_a", a, SessionConfig::default()).unwrap();
    let mut second = AlignSession::with_runtime_registry("plane_b", b, SessionConfig::default()).unwrap();
    first.tick(&mut host).unwrap();
    for _ in 0..3 {
        let _ = second.tick(&mut host);
    }

    let errors = errors_from(&entries, "thumbcam::TargetRegistry");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("plane_a"));
    assert!(errors[0].message.contains("plane_b"));

    let warnings = entries.lock().unwrap()
        .iter()
        .filter(|e| e.severity == LogSeverity::Warn && e.message.contains("stays idle"))
        .count();
    assert_eq!(warnings, 1);

    Runtime::reset_logger();
    Runtime::shutdown();
}
