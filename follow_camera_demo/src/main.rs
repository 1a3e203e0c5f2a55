//! Headless demo host for the follow camera rig.
//!
//! Simulates the pieces a real engine would provide: a tag registry that
//! stands in for the scene, a cursor host, scripted target motion, and a
//! fixed-timestep frame loop. The target runs a circle while the demo
//! pulses the scroll wheel; rig state is printed through the crate's
//! logging system every half second of simulated time.

use std::sync::{Arc, RwLock};

use glam::Vec3;
use rustc_hash::FxHashMap;

use follow_camera::followcam::{
    CameraRig, CursorHost, FrameInput, Result, RigConfig, TargetHandle, TargetTransform,
};
use follow_camera::{rig_debug, rig_info};

const SOURCE: &str = "followcam_demo";

/// Stand-in for the host engine's scene: owns the entities, hands out
/// non-owning handles by tag.
#[derive(Default)]
struct TagRegistry {
    entries: FxHashMap<String, Arc<RwLock<TargetTransform>>>,
}

impl TagRegistry {
    fn spawn(&mut self, tag: &str, transform: TargetTransform) -> Arc<RwLock<TargetTransform>> {
        let entity = Arc::new(RwLock::new(transform));
        self.entries.insert(tag.to_string(), Arc::clone(&entity));
        entity
    }

    fn resolve(&self, tag: &str) -> Option<TargetHandle> {
        self.entries.get(tag).map(Arc::downgrade)
    }
}

/// Cursor host that just reports the request; there is no window here.
struct LoggingCursor;

impl CursorHost for LoggingCursor {
    fn lock_and_hide(&mut self) {
        rig_debug!(SOURCE, "Host asked to lock and hide the pointer cursor");
    }
}

fn main() -> Result<()> {
    let mut registry = TagRegistry::default();
    let player = registry.spawn(
        "Player",
        TargetTransform::new(Vec3::new(6.0, 0.0, 0.0), Vec3::Z),
    );

    let config = RigConfig::default();
    let tag = config.target_tag.clone();
    let mut rig = CameraRig::bind(
        config,
        Vec3::new(6.0, 4.0, 0.0),
        || registry.resolve(&tag),
        &mut LoggingCursor,
    )?;

    rig_info!(
        SOURCE,
        "Rig bound (offset_y = {:.1}); running the player in a circle",
        rig.offset_y()
    );

    let dt = 1.0 / 60.0;
    for tick in 0..600u32 {
        // Scripted motion: a circle of radius 6 in the XZ plane, facing
        // along the tangent.
        let angle = tick as f32 * dt * 0.8;
        if let Ok(mut state) = player.write() {
            state.position = Vec3::new(6.0 * angle.cos(), 0.0, 6.0 * angle.sin());
            state.forward = Vec3::new(-angle.sin(), 0.0, angle.cos());
        }

        // A zoom-in pulse early on, a zoom-out pulse later.
        let scroll = match tick {
            120..=125 => 0.4,
            360..=370 => -0.6,
            _ => 0.0,
        };

        rig.update(&FrameInput {
            delta_time: dt,
            scroll,
        });

        if tick % 30 == 0 {
            let pos = rig.position();
            rig_info!(
                SOURCE,
                "t = {:4.2}s  pos = ({:6.2}, {:5.2}, {:6.2})  fov = {:4.1}",
                tick as f32 * dt,
                pos.x,
                pos.y,
                pos.z,
                rig.fov()
            );
        }
    }

    rig_info!(SOURCE, "Demo finished after 600 frames");
    Ok(())
}
