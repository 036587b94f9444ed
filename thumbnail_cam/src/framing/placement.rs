//! Output of the framing computation and the constraint it becomes.

use glam::{EulerRot, Quat, Vec2, Vec3};

/// Rotation offset (degrees) turning the camera upright towards the plane.
///
/// Applied Z, then X, then Y. The camera's forward axis (+Z) ends up
/// along the plane's -Y, so a camera offset along +Y looks into the plane.
pub const CAMERA_ROTATION_EULER: Vec3 = Vec3::new(90.0, 0.0, 180.0);

/// Visible half sizes of the plane after zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRegion {
    /// Vertical half size (plane z)
    pub v_size: f32,
    /// Horizontal half size (plane x)
    pub h_size: f32,
}

impl CropRegion {
    /// Height over width of the crop.
    pub fn image_aspect(&self) -> f32 {
        self.v_size / self.h_size
    }
}

/// Camera placement relative to the plane.
///
/// No identity of its own: produced by one `FrameFitter::fit` call,
/// applied by the caller, then dropped or compared with the next one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementResult {
    /// Offset from the plane origin in plane space: x shift, y distance, z shift
    pub translation_offset: Vec3,
    /// Euler angles in degrees, see `CAMERA_ROTATION_EULER`
    pub rotation_offset: Vec3,
    pub near_clip: f32,
    pub far_clip: f32,
    /// Distance from the plane along its normal
    pub distance: f32,
    pub crop: CropRegion,
    /// Shift range (x horizontal, y vertical) after aspect correction
    pub slack: Vec2,
}

impl PlacementResult {
    /// Rotation offset as a quaternion.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.rotation_offset.y.to_radians(),
            self.rotation_offset.x.to_radians(),
            self.rotation_offset.z.to_radians(),
        )
    }

    /// Constraint the host attaches to the camera, with the plane as source.
    pub fn to_constraint(&self) -> ParentConstraint {
        ParentConstraint {
            source_weight: 1.0,
            translation_offset: self.translation_offset,
            rotation_offset: self.rotation_offset,
            locked: true,
            active: true,
        }
    }
}

/// Parenting constraint: keeps the camera at a fixed offset from the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParentConstraint {
    pub source_weight: f32,
    pub translation_offset: Vec3,
    /// Euler angles in degrees
    pub rotation_offset: Vec3,
    /// Offsets are fixed and must not be recomputed from the current pose
    pub locked: bool,
    pub active: bool,
}
