/// CameraRig — per-frame third-person follow behavior.
///
/// The rig computes nothing on its own schedule. The host calls
/// `update()` once per rendered frame with that frame's inputs and reads
/// position/rotation/FOV back for its renderer. Everything here runs on
/// the host's frame thread; the rig holds no shared mutable state of its
/// own.

use glam::{Quat, Vec3};
use crate::error::Result;
use crate::math::{look_rotation, slerp_toward};
use super::config::RigConfig;
use super::host::CursorHost;
use super::target::{self, TargetHandle};

/// Narrowest field of view reachable by zooming in, in degrees.
pub const FOV_MIN: f32 = 20.0;

/// Widest field of view reachable by zooming out, in degrees.
/// Also the rig's field of view before any zoom input.
pub const FOV_MAX: f32 = 60.0;

/// Zoom speed is `sensitivity * ZOOM_RATE_FACTOR` degrees per scroll unit.
pub const ZOOM_RATE_FACTOR: f32 = 2.0;

/// External inputs sampled by the host for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Seconds elapsed since the previous frame. Never negative; zero is
    /// valid and leaves the orientation unchanged for the frame.
    pub delta_time: f32,

    /// Accumulated scroll-wheel delta for the frame, 0.0 when idle.
    /// Positive values zoom in (narrow the field of view).
    pub scroll: f32,
}

/// Third-person camera rig following a single target entity.
///
/// Per frame (see [`CameraRig::update`]):
/// - position snaps to the target's position plus a fixed vertical
///   offset captured at bind time — no horizontal lag or dead zone
/// - rotation slerps toward the target's heading at a rate of
///   `delta_time * sensitivity` (clamped to 1, so a large enough step
///   snaps exactly)
/// - field of view follows scroll input, clamped between [`FOV_MIN`]
///   and [`FOV_MAX`]
///
/// A rig whose target was never resolved, or whose target the host has
/// since dropped, performs no per-frame work at all.
pub struct CameraRig {
    config: RigConfig,
    target: Option<TargetHandle>,
    /// Vertical distance above the target, captured once at bind time.
    offset_y: f32,
    position: Vec3,
    rotation: Quat,
    /// Vertical field of view in degrees, within [FOV_MIN, FOV_MAX].
    fov: f32,
}

impl CameraRig {
    /// Create a rig and resolve its target, once.
    ///
    /// The resolver is supplied by the caller and invoked exactly once;
    /// there is no re-resolution later. If it returns `None`, a warning
    /// naming `config.target_tag` is logged and the rig is created
    /// unbound — a permanent no-op rather than an error (the camera then
    /// stays wherever the host placed it).
    ///
    /// On success the rig captures its vertical offset
    /// (`initial_position.y - target.y`) and aligns its rotation to the
    /// target's current heading.
    ///
    /// Bind-time side effect: unless `config.click_to_move_camera` is
    /// set, the host is asked to lock and hide the pointer cursor.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated before anything else; immutable afterwards
    /// * `initial_position` - Where the host placed the rig in the scene
    /// * `resolver` - Caller-supplied target lookup, invoked once
    /// * `cursor` - Host cursor facilities
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `config.validate()` fails. A
    /// missing target is not an error.
    pub fn bind<R, C>(
        config: RigConfig,
        initial_position: Vec3,
        resolver: R,
        cursor: &mut C,
    ) -> Result<Self>
    where
        R: FnOnce() -> Option<TargetHandle>,
        C: CursorHost + ?Sized,
    {
        config.validate()?;

        // Lock and hide cursor unless click-to-move is enabled. Held for
        // the life of the process; reverting is the host's concern.
        if !config.click_to_move_camera {
            cursor.lock_and_hide();
        }

        let mut rig = Self {
            config,
            target: None,
            offset_y: 0.0,
            position: initial_position,
            rotation: Quat::IDENTITY,
            fov: FOV_MAX,
        };

        match resolver() {
            Some(handle) => {
                if let Some(state) = target::sample(&handle) {
                    // Height above the target's reference point, fixed
                    // for the rig's lifetime.
                    rig.offset_y = initial_position.y - state.position.y;

                    // Start aligned with the target's heading instead of
                    // swinging toward it over the first frames.
                    if let Some(aligned) = look_rotation(state.forward) {
                        rig.rotation = aligned;
                    }
                }
                rig.target = Some(handle);
            }
            None => {
                crate::rig_warn!(
                    "followcam::CameraRig",
                    "No entity tagged '{}' was resolved. Camera will not follow any object.",
                    rig.config.target_tag
                );
            }
        }

        Ok(rig)
    }

    /// Advance the rig by one frame.
    ///
    /// Called by the host once per rendered frame. Does nothing when the
    /// target was never resolved or has been dropped. Never fails; all
    /// degenerate inputs degrade to "leave that part unchanged":
    /// - `delta_time == 0` leaves the rotation where it was
    /// - a target forward parallel to world up (undefined look-rotation)
    ///   keeps the previous rotation for the frame
    /// - `scroll == 0.0` leaves the field of view untouched
    pub fn update(&mut self, input: &FrameInput) {
        let Some(handle) = &self.target else {
            return;
        };
        let Some(state) = target::sample(handle) else {
            return;
        };

        // Follow the target, keeping only the captured vertical offset.
        // Direct assignment: horizontal tracking is instantaneous.
        self.position = state.position + Vec3::new(0.0, self.offset_y, 0.0);

        // Smoothly align with the target's heading. Exponential-decay
        // style smoothing: the factor saturating at 1 snaps exactly.
        if let Some(desired) = look_rotation(state.forward) {
            let t = (input.delta_time * self.config.sensitivity).clamp(0.0, 1.0);
            self.rotation = slerp_toward(self.rotation, desired, t);
        }

        // Adjust zoom when the scroll wheel moved this frame.
        if self.config.can_zoom && input.scroll != 0.0 {
            let rate = self.config.sensitivity * ZOOM_RATE_FACTOR;
            self.fov = (self.fov - input.scroll * rate).clamp(FOV_MIN, FOV_MAX);
        }
    }

    // ===== GETTERS =====

    /// World position of the rig.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// World rotation of the rig.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Vertical offset above the target captured at bind time.
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    /// Whether a target was resolved at bind time. Does not check that
    /// the target is still alive.
    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    /// The configuration the rig was bound with.
    pub fn config(&self) -> &RigConfig {
        &self.config
    }
}

#[cfg(test)]
#[path = "camera_rig_tests.rs"]
mod tests;
