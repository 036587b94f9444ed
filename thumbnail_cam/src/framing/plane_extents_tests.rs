use glam::Vec3;
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_is_flat() {
    let extents = PlaneExtents::new(2.0, 1.5);
    assert_eq!(extents.width(), 2.0);
    assert_eq!(extents.depth(), 1.5);
    assert_eq!(extents.height(), 0.0);
    assert!(extents.is_flat(1e-5));
}

#[test]
fn test_from_mesh_bounds_scales_componentwise() {
    // Built-in plane mesh: 10x10 units, extents (5, 0, 5)
    let extents = PlaneExtents::from_mesh_bounds(Vec3::new(0.4, 1.0, 0.3), Vec3::new(5.0, 0.0, 5.0));
    assert!((extents.width() - 2.0).abs() < 1e-6);
    assert!((extents.depth() - 1.5).abs() < 1e-6);
    assert_eq!(extents.height(), 0.0);
}

#[test]
fn test_from_mesh_bounds_mirrored_scale() {
    let extents = PlaneExtents::from_mesh_bounds(Vec3::new(-1.0, 1.0, -2.0), Vec3::new(5.0, 0.0, 5.0));
    assert_eq!(extents.width(), 5.0);
    assert_eq!(extents.depth(), 10.0);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_flat_plane() {
    assert!(PlaneExtents::new(1.0, 1.0).validate(1e-5).is_ok());
}

#[test]
fn test_validate_height_within_epsilon() {
    let extents = PlaneExtents::from_half_size(Vec3::new(1.0, 1e-6, 1.0));
    assert!(extents.validate(1e-5).is_ok());
}

#[test]
fn test_validate_cube_fails() {
    let extents = PlaneExtents::from_half_size(Vec3::new(0.5, 0.5, 0.5));
    let result = extents.validate(1e-5);
    assert!(matches!(result, Err(Error::InvalidSurfaceGeometry(_))));
}

#[test]
fn test_validate_zero_width_fails() {
    let result = PlaneExtents::new(0.0, 1.0).validate(1e-5);
    assert!(matches!(result, Err(Error::InvalidSurfaceGeometry(_))));
}

#[test]
fn test_validate_non_finite_fails() {
    let result = PlaneExtents::new(f32::INFINITY, 1.0).validate(1e-5);
    assert!(matches!(result, Err(Error::InvalidSurfaceGeometry(_))));

    let result = PlaneExtents::new(1.0, f32::NAN).validate(1e-5);
    assert!(matches!(result, Err(Error::InvalidSurfaceGeometry(_))));
}
