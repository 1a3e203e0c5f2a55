//! Camera rig module — follow/orient/zoom behavior driven by the host loop.
//!
//! The rig is a tool provided to the host, owned and driven by the caller.
//! The host resolves the target (dependency injection, no scene search in
//! this crate), calls [`CameraRig::update`] once per rendered frame, and
//! reads back position/rotation/FOV for its renderer.

mod camera_rig;
mod config;
mod host;
mod target;

pub use camera_rig::{
    CameraRig, FrameInput,
    FOV_MAX, FOV_MIN, ZOOM_RATE_FACTOR,
};
pub use config::RigConfig;
pub use host::{CursorHost, NoopCursor};
pub use target::{TargetHandle, TargetTransform};
