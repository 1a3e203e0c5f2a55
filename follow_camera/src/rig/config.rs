/// RigConfig — immutable-after-bind settings for the camera rig.
///
/// The host fills this in once before the first frame (from its own
/// settings screen, a config file, whatever). The rig validates it at
/// bind time and never mutates it afterwards.

use glam::Vec2;
use crate::error::{Error, Result};

/// Camera rig configuration, set once before the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RigConfig {
    /// Move the camera only while a mouse button is held. When disabled,
    /// the rig asks the host to lock and hide the pointer at bind time.
    pub click_to_move_camera: bool,

    /// Enable zoom in/out on scroll-wheel input.
    pub can_zoom: bool,

    /// Tag of the entity the rig should follow. The host's resolver does
    /// the actual lookup; the rig uses the tag in diagnostics.
    pub target_tag: String,

    /// Rotation smoothing rate. Higher values converge on the target
    /// heading faster; zoom speed also scales with it. Must be finite
    /// and greater than zero.
    pub sensitivity: f32,

    /// Pitch limits in degrees (x = maximum up, y = maximum down).
    /// Stored for hosts that clamp pitch themselves; the update loop
    /// does not apply them.
    pub camera_limit: Vec2,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            click_to_move_camera: false,
            can_zoom: true,
            target_tag: String::from("Player"),
            sensitivity: 5.0,
            camera_limit: Vec2::new(-45.0, 40.0),
        }
    }
}

impl RigConfig {
    /// Check the configuration for values the rig cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if:
    /// - `sensitivity` is not finite or not greater than zero
    /// - `camera_limit` contains NaN or infinity
    pub fn validate(&self) -> Result<()> {
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "sensitivity must be finite and > 0, got {}",
                self.sensitivity
            )));
        }
        if !self.camera_limit.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "camera_limit must be finite, got {}",
                self.camera_limit
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
