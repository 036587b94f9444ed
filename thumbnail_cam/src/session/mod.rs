//! Session module: drives one plane's framing against the host scene.
//!
//! The host is only reached through `SceneHost`; the camera handle is
//! resolved once, claimed in the shared `TargetRegistry`, and dropped
//! again when the host reports the camera destroyed.

mod align_session;
mod memory_scene_host;
mod scene_host;
mod target_registry;

pub use align_session::{AlignSession, SessionConfig, SessionState, TickOutcome, DEFAULT_CAMERA_PATH};
pub use memory_scene_host::{MemoryCamera, MemorySceneHost};
pub use scene_host::{CameraHandle, SceneHost, SurfaceHandle};
pub use target_registry::{SessionKey, TargetRegistry};
