//! Framing module: the geometry that puts the upload camera over the plane.
//!
//! Everything here is a pure value pipeline: extents, params, aspect and
//! intrinsics go in, a `PlacementResult` comes out. Applying the result
//! to a real camera is the session's (and ultimately the host's) job.

mod change_detector;
mod frame_fitter;
mod framing_params;
mod placement;
mod plane_extents;
mod projection;

pub use change_detector::{ChangeDetector, LastAppliedState, ParamChanges};
pub use frame_fitter::{FitterConfig, FrameFitter};
pub use framing_params::{
    FramingParams,
    ZOOM_IN_MIN, ZOOM_IN_MAX, SHIFT_MIN, SHIFT_MAX,
};
pub use placement::{CropRegion, ParentConstraint, PlacementResult, CAMERA_ROTATION_EULER};
pub use plane_extents::PlaneExtents;
pub use projection::{CameraIntrinsics, TargetAspectRatio};
