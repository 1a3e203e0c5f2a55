/*!
# Follow Camera

Third-person follow camera rig for 3D scenes.

The rig tracks a single target entity: every frame it repositions itself
to the target's position plus a fixed vertical offset, smoothly rotates
toward the target's heading, and adjusts field-of-view from scroll input.

The crate is an embedded per-frame behavior, not a standalone program.
The host engine owns the frame loop, the scene, the input devices and the
renderer; the rig is a tool provided to the host, owned and driven by the
caller:

- **[`followcam::CameraRig::bind`]**: resolve the target once at scene
  start through a caller-supplied resolver, capture the vertical offset,
  and request cursor lock on the host.
- **[`followcam::CameraRig::update`]**: called once per rendered frame
  with that frame's elapsed time and scroll delta; the host reads back
  position, rotation and FOV for its renderer.

The rig never blocks, spawns, or schedules work itself.
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod rig;

// Main followcam namespace module
pub mod followcam {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera rig types
    pub use crate::rig::{
        CameraRig, CursorHost, FrameInput, NoopCursor, RigConfig,
        TargetHandle, TargetTransform,
        FOV_MAX, FOV_MIN, ZOOM_RATE_FACTOR,
    };

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: rig_* macros are exported at the crate root by #[macro_export]
    }

    // Orientation math sub-module
    pub mod math {
        pub use crate::math::*;
    }
}

// Re-export math library at crate root
pub use glam;
