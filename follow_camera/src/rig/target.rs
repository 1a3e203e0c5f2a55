/// Target transform and the non-owning handle the rig tracks it through.
///
/// The host owns the target entity and mutates its transform every frame
/// from its own systems. The rig only ever reads it, through a weak
/// handle, so scene teardown order does not matter: once the host drops
/// the target, the rig silently stops following.

use std::sync::{RwLock, Weak};
use glam::Vec3;

/// World-space state of the tracked entity.
///
/// `forward` is the direction the entity is facing. It does not need to
/// be normalized; the orientation math normalizes it and rejects
/// degenerate directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetTransform {
    /// World position of the entity's reference point.
    pub position: Vec3,
    /// Facing direction of the entity.
    pub forward: Vec3,
}

impl TargetTransform {
    /// Create a target transform from position and facing direction.
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        Self { position, forward }
    }
}

/// Non-owning handle to a host-owned target transform.
///
/// The host keeps the `Arc<RwLock<TargetTransform>>`; the rig holds this
/// weak side and upgrades it once per frame.
pub type TargetHandle = Weak<RwLock<TargetTransform>>;

/// Read the target state through a handle.
///
/// Returns `None` when the target has been dropped by the host, or when
/// its lock is poisoned (treated the same as a dead target).
pub(crate) fn sample(handle: &TargetHandle) -> Option<TargetTransform> {
    let strong = handle.upgrade()?;
    let state = strong.read().ok()?;
    Some(*state)
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
