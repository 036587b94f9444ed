//! Host application boundary.

use crate::error::Result;
use crate::framing::{CameraIntrinsics, ParentConstraint, PlaneExtents};

/// Host-issued handle of a camera object (the placement target).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CameraHandle(pub u64);

/// Host-issued handle of the plane a session is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceHandle(pub u64);

/// What a session needs from the host scene graph.
///
/// Lookups are cheap and idempotent; sessions call `find_camera` until
/// it succeeds and then keep the handle until the host reports the
/// camera destroyed.
pub trait SceneHost {
    /// Resolve a camera by its logical path (e.g. `/VRCCam`).
    fn find_camera(&self, path: &str) -> Option<CameraHandle>;

    /// Current intrinsics, or `None` if the camera no longer exists.
    fn camera_intrinsics(&self, camera: CameraHandle) -> Option<CameraIntrinsics>;

    /// World-space half extents of the surface mesh, or `None` if the
    /// surface has no usable mesh.
    fn surface_extents(&self, surface: SurfaceHandle) -> Option<PlaneExtents>;

    fn set_clip_planes(&mut self, camera: CameraHandle, near: f32, far: f32) -> Result<()>;

    /// Attach (or update) a parenting constraint with `source` as its
    /// single source.
    fn apply_constraint(
        &mut self,
        camera: CameraHandle,
        source: SurfaceHandle,
        constraint: &ParentConstraint,
    ) -> Result<()>;
}
