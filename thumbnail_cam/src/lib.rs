/*!
# Thumbnail Cam

Frames the avatar-upload thumbnail camera onto a textured plane.

Given the plane's world-space extents, a zoom/shift crop, the camera's
vertical field of view and the fixed aspect ratio of the thumbnail
capture, this crate computes where the camera has to sit relative to the
plane (translation, rotation, clip planes) so the captured frame shows
exactly the requested crop of the plane texture.

## Architecture

- **FrameFitter**: pure framing computation
- **ChangeDetector**: decides whether the parameters changed since the last placement
- **TargetRegistry**: ownership claims, one session per camera
- **AlignSession**: per-tick driver talking to the host through `SceneHost`
- **Runtime**: process-wide registry and logger

The host application (scene graph, constraints, frame loop) is reached
only through the `SceneHost` trait.
*/

// Internal modules
mod error;
mod runtime;
pub mod log;
pub mod framing;
pub mod session;

// Main thumbcam namespace module
pub mod thumbcam {
    // Error types
    pub use crate::error::{Error, Result};

    // Runtime singleton
    pub use crate::runtime::Runtime;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Framing sub-module
    pub mod framing {
        pub use crate::framing::*;
    }

    // Session sub-module
    pub mod session {
        pub use crate::session::*;
    }
}

// Re-export math library at crate root
pub use glam;
