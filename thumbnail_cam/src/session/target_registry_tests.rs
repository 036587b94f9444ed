//! Tests for TargetRegistry
//!
//! These tests validate session registration, first-come ownership,
//! release and cleanup on unregister.

use super::*;

// ============================================================================
// Tests: Sessions
// ============================================================================

#[test]
fn test_registry_new() {
    let registry = TargetRegistry::new();
    assert_eq!(registry.session_count(), 0);
    assert_eq!(registry.claim_count(), 0);
}

#[test]
fn test_register_sessions() {
    let mut registry = TargetRegistry::new();
    let a = registry.register_session("plane_a");
    let b = registry.register_session("plane_b");

    assert_ne!(a, b);
    assert_eq!(registry.session_count(), 2);
    assert_eq!(registry.session_name(a), Some("plane_a"));
    assert_eq!(registry.session_name(b), Some("plane_b"));
}

// ============================================================================
// Tests: Ownership
// ============================================================================

#[test]
fn test_first_claim_wins() {
    let mut registry = TargetRegistry::new();
    let a = registry.register_session("plane_a");
    let b = registry.register_session("plane_b");
    let camera = CameraHandle(7);

    assert!(registry.acquire(camera, a).is_ok());
    let result = registry.acquire(camera, b);

    assert!(matches!(result, Err(Error::DuplicateOwnership(_))));
    assert_eq!(registry.owner(camera), Some(a));
}

#[test]
fn test_reacquire_by_owner_is_ok() {
    let mut registry = TargetRegistry::new();
    let a = registry.register_session("plane_a");

    registry.acquire(CameraHandle(1), a).unwrap();
    assert!(registry.acquire(CameraHandle(1), a).is_ok());
    assert_eq!(registry.claim_count(), 1);
}

#[test]
fn test_acquire_unknown_session_fails() {
    let mut registry = TargetRegistry::new();
    let a = registry.register_session("plane_a");
    registry.unregister_session(a);

    let result = registry.acquire(CameraHandle(1), a);
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
}

#[test]
fn test_distinct_targets_have_distinct_owners() {
    let mut registry = TargetRegistry::new();
    let a = registry.register_session("plane_a");
    let b = registry.register_session("plane_b");

    registry.acquire(CameraHandle(1), a).unwrap();
    registry.acquire(CameraHandle(2), b).unwrap();

    assert_eq!(registry.owner(CameraHandle(1)), Some(a));
    assert_eq!(registry.owner(CameraHandle(2)), Some(b));
}

// ============================================================================
// Tests: Release
// ============================================================================

#[test]
fn test_release_hands_over_target() {
    let mut registry = TargetRegistry::new();
    let a = registry.register_session("plane_a");
    let b = registry.register_session("plane_b");
    let camera = CameraHandle(3);

    registry.acquire(camera, a).unwrap();
    assert!(registry.release(camera, a));
    assert!(registry.owner(camera).is_none());
    assert!(registry.acquire(camera, b).is_ok());
}

#[test]
fn test_release_by_non_owner_is_noop() {
    let mut registry = TargetRegistry::new();
    let a = registry.register_session("plane_a");
    let b = registry.register_session("plane_b");

    registry.acquire(CameraHandle(3), a).unwrap();
    assert!(!registry.release(CameraHandle(3), b));
    assert_eq!(registry.owner(CameraHandle(3)), Some(a));
}

#[test]
fn test_unregister_releases_claims() {
    let mut registry = TargetRegistry::new();
    let a = registry.register_session("plane_a");
    registry.acquire(CameraHandle(1), a).unwrap();
    registry.acquire(CameraHandle(2), a).unwrap();

    assert_eq!(registry.unregister_session(a), 2);
    assert_eq!(registry.session_count(), 0);
    assert_eq!(registry.claim_count(), 0);
    assert_eq!(registry.unregister_session(a), 0);
}

#[test]
fn test_clear() {
    let mut registry = TargetRegistry::new();
    let a = registry.register_session("plane_a");
    registry.acquire(CameraHandle(1), a).unwrap();

    registry.clear();
    assert_eq!(registry.session_count(), 0);
    assert_eq!(registry.claim_count(), 0);
}
